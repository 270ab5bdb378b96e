use engine::OutcomeState;
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
    let settings = &state.settings;
    let [prefs, password, status] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(form::height(&settings.view) + 2),
        Constraint::Length(1),
    ])
    .areas(area);

    let toggle = if state.email_notifications { "[x]" } else { "[ ]" };
    Card::new("Preferences", &theme).render_with(
        frame,
        prefs,
        Paragraph::new(Line::from(vec![
            Span::styled(toggle, Style::default().fg(theme.accent)),
            Span::raw(" Email notifications  "),
            Span::styled("Ctrl+T toggle", Style::default().fg(theme.text_muted)),
        ])),
    );

    let card = Card::new("Change password", &theme).focused(!settings.saving);
    let inner = card.inner(password);
    frame.render_widget(card.block(), password);
    // Password errors are shown once, below the form.
    form::render(
        frame,
        inner,
        &settings.view,
        &settings.form.values,
        &engine::ValidationErrors::default(),
        !settings.saving,
        &theme,
    );

    let line = if settings.saving {
        Span::styled("Saving...", Style::default().fg(theme.accent))
    } else if let Some(err) = &settings.error {
        Span::styled(err.as_str(), Style::default().fg(theme.error))
    } else if let OutcomeState::Success(message) = settings.notice.state() {
        Span::styled(format!("✓ {message}"), Style::default().fg(theme.positive))
    } else {
        Span::raw("")
    };
    frame.render_widget(Paragraph::new(line), status);
}
