use engine::{PinChallenge, pin::PIN_MAX_LEN};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::{app::PinButton, ui::theme::Theme};

const WIDTH: u16 = 40;
const HEIGHT: u16 = 9;

/// Where the modal sits inside `area`; clicks outside it cancel.
pub fn modal_area(area: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(HEIGHT)])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::horizontal([Constraint::Length(WIDTH)])
        .flex(Flex::Center)
        .areas(row);
    rect
}

pub fn render(frame: &mut Frame<'_>, area: Rect, pin: &PinChallenge, focus: PinButton) {
    let theme = Theme::default();
    let rect = modal_area(area);
    frame.render_widget(Clear, rect);

    let block = Block::default()
        .title(" Enter PIN ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border_focused))
        .style(Style::default().bg(theme.surface));

    let slots: Vec<&str> = (0..PIN_MAX_LEN)
        .map(|i| if i < pin.len() { "●" } else { "·" })
        .collect();

    let mut lines = vec![
        Line::from(Span::styled(
            "Confirm this transaction",
            Style::default().fg(theme.text_muted),
        )),
        Line::default(),
        Line::from(Span::styled(
            slots.join(" "),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
    ];
    match pin.error() {
        Some(message) => lines.push(Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(theme.error),
        ))),
        None => lines.push(Line::default()),
    }
    lines.push(Line::default());
    lines.push(Line::from(vec![
        button("Confirm", focus == PinButton::Confirm, &theme),
        Span::raw("   "),
        button("Cancel", focus == PinButton::Cancel, &theme),
    ]));

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block),
        rect,
    );
}

fn button(label: &str, focused: bool, theme: &Theme) -> Span<'static> {
    let style = if focused {
        Style::default()
            .fg(theme.surface)
            .bg(theme.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.text_muted)
    };
    Span::styled(format!("[ {label} ]"), style)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modal_is_centered() {
        let rect = modal_area(Rect::new(0, 0, 100, 30));
        assert_eq!((rect.width, rect.height), (WIDTH, HEIGHT));
        assert_eq!(rect.x, 30);
        assert!((10..=11).contains(&rect.y));
    }

    #[test]
    fn modal_shrinks_on_tiny_terminals() {
        let rect = modal_area(Rect::new(0, 0, 20, 5));
        assert!(rect.width <= 20 && rect.height <= 5);
    }
}
