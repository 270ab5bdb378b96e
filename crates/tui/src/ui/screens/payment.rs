use engine::{FlowKind, OutcomeState};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    app::AppState,
    ui::{
        components::{card::Card, form, pin_modal},
        theme::Theme,
    },
};

/// Transfer and airtime share one layout: form, status line, PIN modal.
pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState, kind: FlowKind) {
    let theme = Theme::default();
    let payment = state.payment(kind);
    let flow = &payment.flow;

    let title = match kind {
        FlowKind::Transfer => "Send money",
        FlowKind::Airtime => "Buy airtime",
    };
    let [body, status] =
        Layout::vertical([Constraint::Length(form::height(&payment.view) + 2), Constraint::Length(3)])
            .areas(area);

    let editable = !flow.pin().is_open() && !flow.is_processing();
    let card = Card::new(title, &theme).focused(editable);
    let inner = card.inner(body);
    frame.render_widget(card.block(), body);
    form::render(frame, inner, &payment.view, flow.form(), flow.errors(), editable, &theme);

    let line = if flow.is_processing() {
        Line::from(Span::styled(
            "Processing...",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ))
    } else {
        match flow.outcome() {
            OutcomeState::Success(message) => Line::from(Span::styled(
                format!("✓ {message}"),
                Style::default().fg(theme.positive),
            )),
            OutcomeState::Error(message) => Line::from(Span::styled(
                format!("✗ {message}"),
                Style::default().fg(theme.error),
            )),
            OutcomeState::None => Line::from(vec![
                Span::styled("Enter", Style::default().fg(theme.accent)),
                Span::styled(" continue to PIN", Style::default().fg(theme.text_muted)),
            ]),
        }
    };
    frame.render_widget(Paragraph::new(line), status);

    if flow.pin().is_open() {
        let full = frame.area();
        pin_modal::render(frame, full, flow.pin(), payment.pin_focus);
    }
}
