use engine::format::mask_account;
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
        components::{card::StatCard, money},
        theme::Theme,
    },
};

const HIDDEN_ACCOUNT: &str = "••••••••••";
const HIDDEN_BALANCE: &str = "••••••••";

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::default();
    let dashboard = &state.dashboard;

    let [greeting, cards, status] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(4),
        Constraint::Min(1),
    ])
    .areas(area);

    let Some(summary) = &dashboard.summary else {
        let message = dashboard
            .error
            .as_deref()
            .unwrap_or("Account information unavailable.");
        frame.render_widget(
            Paragraph::new(Span::styled(message, Style::default().fg(theme.error))),
            greeting,
        );
        return;
    };

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("Welcome back, ", Style::default().fg(theme.text_muted)),
            Span::styled(summary.user_name.as_str(), Style::default().fg(theme.text)),
        ])),
        greeting,
    );

    let [account, kind, balance] = Layout::horizontal([
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
    ])
    .areas(cards);

    let account_number = if dashboard.show_account {
        summary.account_number.clone()
    } else {
        HIDDEN_ACCOUNT.to_string()
    };
    StatCard::new("Account number", account_number, &theme)
        .subtitle(format!("a show/hide · {}", mask_account(&summary.account_number)))
        .render(frame, account);

    StatCard::new("Account type", summary.account_type.as_str(), &theme).render(frame, kind);

    let balance_text = if dashboard.show_balance {
        money::balance(summary.balance, &theme).content.into_owned()
    } else {
        HIDDEN_BALANCE.to_string()
    };
    StatCard::new("Balance", balance_text, &theme)
        .subtitle("b show/hide")
        .render(frame, balance);

    if let Some(err) = &dashboard.error {
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!("Showing cached data: {err}"),
                Style::default().fg(theme.error),
            )),
            status,
        );
    }
}
