use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
};

use crate::{
    app::{AppState, LandingMode},
    ui::{
        components::{card::Card, form},
        theme::Theme,
    },
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::default();
    let landing = &state.landing;
    let (title, view, buffer) = match landing.mode {
        LandingMode::Login => ("Log in", &landing.login_view, &landing.login),
        LandingMode::Signup => ("Sign up", &landing.signup_view, &landing.signup),
    };

    let [header, body, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(form::height(view) + 2),
        Constraint::Length(2),
    ])
    .flex(Flex::Center)
    .areas(area);
    let [header] = Layout::horizontal([Constraint::Length(48)])
        .flex(Flex::Center)
        .areas(header);
    let [body] = Layout::horizontal([Constraint::Length(48)])
        .flex(Flex::Center)
        .areas(body);

    frame.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled(
                "SkyBank",
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Banking made simple",
                Style::default().fg(theme.text_muted),
            )),
        ])
        .alignment(Alignment::Center),
        header,
    );

    frame.render_widget(Clear, body);
    let card = Card::new(title, &theme).focused(true);
    let inner = card.inner(body);
    frame.render_widget(card.block(), body);
    form::render(frame, inner, view, &buffer.values, &buffer.errors, true, &theme);

    let switch = match landing.mode {
        LandingMode::Login => "Ctrl+S create an account",
        LandingMode::Signup => "Ctrl+S back to log in",
    };
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("Enter", Style::default().fg(theme.accent)),
            Span::raw(" submit  "),
            Span::styled(switch, Style::default().fg(theme.text_muted)),
        ]))
        .alignment(Alignment::Center),
        footer,
    );
}
