use engine::OutcomeState;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::{
    app::AppState,
    ui::{
        components::{card::Card, form},
        theme::Theme,
    },
};

const QUICK_HELP: &[&str] = &[
    "Lost/stolen card: call immediately to block.",
    "Unauthorized transaction: report within 24 hours.",
    "PIN reset: available in the app under Settings.",
];

const FAQ: &[(&str, &str)] = &[
    (
        "How do I block my card?",
        "Call the hotline or use Card Services → Block Card.",
    ),
    (
        "How long for transfers?",
        "Usually instant for same-bank, up to 24 hours for inter-bank.",
    ),
    (
        "Where is my account statement?",
        "Download statements from the Accounts → Statements section.",
    ),
];

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::default();
    let support = &state.support;
    let [top, faq] = Layout::vertical([Constraint::Min(12), Constraint::Length(8)]).areas(area);
    let [contact, message] =
        Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)]).areas(top);

    let mut lines = vec![
        Line::from(Span::styled(
            "We're here to help, 24/7 for urgent issues.",
            Style::default().fg(theme.text_muted),
        )),
        Line::default(),
        Line::from(vec![
            Span::styled("Phone  ", Style::default().fg(theme.text_muted)),
            Span::styled("+234 800 8765", Style::default().fg(theme.accent)),
        ]),
        Line::from(vec![
            Span::styled("Email  ", Style::default().fg(theme.text_muted)),
            Span::styled("support@skybank.com", Style::default().fg(theme.accent)),
        ]),
        Line::default(),
        Line::from(Span::styled(
            "Quick help",
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];
    lines.extend(QUICK_HELP.iter().map(|item| Line::from(format!("• {item}"))));
    Card::new("Contact", &theme).render_with(
        frame,
        contact,
        Paragraph::new(lines).wrap(Wrap { trim: false }),
    );

    let card = Card::new("Send us a message", &theme).focused(!support.sending);
    let inner = card.inner(message);
    frame.render_widget(card.block(), message);
    let [fields, status] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);
    form::render(
        frame,
        fields,
        &support.view,
        &support.form.values,
        &support.form.errors,
        !support.sending,
        &theme,
    );
    let status_line = if support.sending {
        Span::styled("Sending...", Style::default().fg(theme.accent))
    } else if let OutcomeState::Success(notice) = support.notice.state() {
        Span::styled(format!("✓ {notice}"), Style::default().fg(theme.positive))
    } else {
        Span::styled("Enter send", Style::default().fg(theme.text_muted))
    };
    frame.render_widget(Paragraph::new(status_line), status);

    let faq_lines = FAQ
        .iter()
        .flat_map(|(q, a)| {
            [
                Line::from(Span::styled(*q, Style::default().fg(theme.text).add_modifier(Modifier::BOLD))),
                Line::from(Span::styled(format!("  {a}"), Style::default().fg(theme.text_muted))),
            ]
        })
        .collect::<Vec<_>>();
    Card::new("FAQ", &theme).render_with(frame, faq, Paragraph::new(faq_lines));
}
