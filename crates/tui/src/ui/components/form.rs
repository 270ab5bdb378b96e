use engine::{FormState, ValidationErrors};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{app::FormView, ui::theme::Theme};

/// Label, value and inline error of every field, top to bottom.
pub fn render(
    frame: &mut Frame<'_>,
    area: Rect,
    view: &FormView,
    values: &FormState,
    errors: &ValidationErrors,
    active: bool,
    theme: &Theme,
) {
    let mut lines = Vec::new();
    for (index, field) in view.fields().iter().enumerate() {
        let focused = active && index == view.focus();
        let label_style = if focused {
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text_muted)
        };
        lines.push(Line::from(Span::styled(field.label, label_style)));

        let cursor = if focused { "│" } else { "" };
        let value = field.display(values.get(field.name));
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(format!("{value}{cursor}"), Style::default().fg(theme.text)),
        ]));

        match errors.get(field.name) {
            Some(message) => lines.push(Line::from(Span::styled(
                format!("  {message}"),
                Style::default().fg(theme.error),
            ))),
            None => lines.push(Line::default()),
        }
    }
    frame.render_widget(Paragraph::new(lines), area);
}

/// Rows needed by [`render`].
pub fn height(view: &FormView) -> u16 {
    (view.fields().len() * 3) as u16
}
