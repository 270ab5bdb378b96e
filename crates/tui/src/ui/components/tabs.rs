use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{app::Section, ui::theme::Theme};

/// One line of section tabs, each prefixed by its function key.
pub fn render_tabs(frame: &mut Frame<'_>, area: Rect, active: Section, locked: bool, theme: &Theme) {
    let mut spans = vec![Span::raw(" ")];

    for (i, section) in Section::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        let key = format!("F{}", i + 1);
        if *section == active {
            spans.push(Span::styled(key, Style::default().fg(theme.text_muted)));
            spans.push(Span::styled(
                format!("[{}]", section.label()),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            // Dimmed while a modal holds the lock.
            let style = if locked {
                Style::default().fg(theme.border)
            } else {
                Style::default().fg(theme.text_muted)
            };
            spans.push(Span::styled(format!("{key} {}", section.label()), style));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
