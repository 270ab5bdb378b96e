use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::{
    app::AppState,
    ui::{components::money, theme::Theme},
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::default();
    let [header, list] = Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);

    render_header(frame, header, state, &theme);
    render_list(frame, list, state, &theme);
}

fn render_header(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let history = &state.history;
    let date = if history.date_input.is_empty() && !history.editing_date {
        "any".to_string()
    } else if history.editing_date {
        format!("{}│", history.date_input)
    } else {
        history.date_input.clone()
    };
    let date_style = if history.editing_date {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.text)
    };

    let mut line = vec![
        Span::styled("Type", Style::default().fg(theme.text_muted)),
        Span::raw(format!(": {}   ", history.type_filter.label())),
        Span::styled("Date", Style::default().fg(theme.text_muted)),
        Span::raw(": "),
        Span::styled(date, date_style),
    ];
    if let Some(err) = &history.error {
        line.push(Span::raw("   "));
        line.push(Span::styled(err.as_str(), Style::default().fg(theme.error)));
    }

    let block = Block::default().borders(Borders::ALL).title(" Transactions ");
    frame.render_widget(Paragraph::new(Line::from(line)).block(block), area);
}

fn render_list(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let rows = state.history.visible();
    if rows.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "No transactions match these filters.",
                Style::default().fg(theme.text_muted),
            ))
            .block(Block::default().borders(Borders::ALL)),
            area,
        );
        return;
    }

    let items = rows
        .iter()
        .map(|tx| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    tx.date.format("%d %b %Y").to_string(),
                    Style::default().fg(theme.text_muted),
                ),
                Span::raw("  "),
                Span::raw(format!("{:<6}  ", tx.kind.as_str())),
                money::signed_amount(tx.amount, tx.kind, theme),
                Span::raw("  "),
                Span::raw(tx.description.clone()),
            ]))
        })
        .collect::<Vec<_>>();

    let mut list_state = ListState::default();
    list_state.select(Some(state.history.selected));

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("» ");

    frame.render_stateful_widget(list, area, &mut list_state);
}
