use ratatui::{style::Style, text::Span};

use crate::ui::theme::Theme;

#[derive(Debug, Clone, Copy)]
pub struct KeyHint {
    pub key: &'static str,
    pub action: &'static str,
}

impl KeyHint {
    pub const fn new(key: &'static str, action: &'static str) -> Self {
        Self { key, action }
    }
}

pub fn hints_to_spans(hints: &[KeyHint], theme: &Theme) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(hint.key, Style::default().fg(theme.accent)));
        spans.push(Span::raw(format!(" {}", hint.action)));
    }
    spans
}

pub fn hint_separator(theme: &Theme) -> Span<'static> {
    Span::styled("  │  ", Style::default().fg(theme.border))
}

pub const FORM: &[KeyHint] = &[
    KeyHint::new("Tab", "next"),
    KeyHint::new("←→", "choose"),
    KeyHint::new("Enter", "submit"),
];

pub const PIN: &[KeyHint] = &[
    KeyHint::new("0-9", "digit"),
    KeyHint::new("Tab", "button"),
    KeyHint::new("Enter", "press"),
    KeyHint::new("Esc", "cancel"),
];

pub const GLOBAL: &[KeyHint] = &[
    KeyHint::new("F1-F10", "sections"),
    KeyHint::new("Ctrl+Q", "quit"),
];
