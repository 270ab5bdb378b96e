use engine::format::mask_card;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
};

use api_types::card::CardStatus;

use crate::{
    app::{AppState, CardsFocus},
    ui::{
        components::{card::Card, form},
        theme::Theme,
    },
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::default();
    let cards = &state.cards;
    let [list, side] =
        Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)]).areas(area);

    render_list(frame, list, state, &theme);

    if cards.focus == CardsFocus::Form {
        let title = if cards.editing_id.is_some() {
            "Edit card"
        } else {
            "Add card"
        };
        let card = Card::new(title, &theme).focused(true);
        let inner = card.inner(side);
        frame.render_widget(card.block(), side);
        form::render(frame, inner, &cards.view, &cards.form.values, &cards.form.errors, true, &theme);
    } else if let Some(err) = &cards.error {
        frame.render_widget(
            Paragraph::new(Span::styled(err.as_str(), Style::default().fg(theme.error))),
            side,
        );
    }
}

fn render_list(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let cards = &state.cards;
    let card = Card::new("My cards", theme).focused(cards.focus == CardsFocus::List);

    if cards.items.is_empty() {
        card.render_with(
            frame,
            area,
            Paragraph::new(Span::styled(
                "No cards yet. Press a to add one.",
                Style::default().fg(theme.text_muted),
            )),
        );
        return;
    }

    let items = cards
        .items
        .iter()
        .map(|c| {
            let status_color = match c.status {
                CardStatus::Active => theme.positive,
                CardStatus::Blocked => theme.error,
            };
            ListItem::new(Line::from(vec![
                Span::raw(format!("{}  exp {}  ", mask_card(&c.card_number), c.expiry)),
                Span::styled(c.status.as_str(), Style::default().fg(status_color)),
            ]))
        })
        .collect::<Vec<_>>();

    let mut list_state = ListState::default();
    list_state.select(Some(cards.selected));
    let list = List::new(items)
        .block(card.block())
        .highlight_style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("» ");
    frame.render_stateful_widget(list, area, &mut list_state);
}
