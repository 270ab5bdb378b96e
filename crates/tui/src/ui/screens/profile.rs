use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    app::AppState,
    ui::{
        components::{card::Card, form},
        theme::Theme,
    },
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::default();
    let profile = &state.profile;
    let [body, status] = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    if profile.editing {
        let card = Card::new("Edit profile", &theme).focused(true);
        let inner = card.inner(body);
        frame.render_widget(card.block(), body);
        form::render(
            frame,
            inner,
            &profile.view,
            &profile.form.values,
            &profile.form.errors,
            true,
            &theme,
        );
    } else {
        let row = |label: &'static str, value: &str| {
            Line::from(vec![
                Span::styled(format!("{label:<16}"), Style::default().fg(theme.text_muted)),
                Span::styled(value.to_string(), Style::default().fg(theme.text)),
            ])
        };
        let lines = vec![
            row("Name", &profile.profile.name),
            row("Email", &profile.profile.email),
            row("Phone", &profile.profile.phone),
            Line::default(),
            row("Account number", &profile.account_number),
            row("Account type", &profile.account_type),
        ];
        Card::new("Profile", &theme).render_with(frame, body, Paragraph::new(lines));
    }

    if let Some(err) = &profile.error {
        frame.render_widget(
            Paragraph::new(Span::styled(err.as_str(), Style::default().fg(theme.error))),
            status,
        );
    }
}
