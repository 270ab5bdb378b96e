use api_types::transaction::TransactionType;
use engine::Amount;
use ratatui::{style::Style, text::Span};

use crate::ui::theme::Theme;

/// Credits in green with `+`, debits in red with `-`.
#[must_use]
pub fn signed_amount(amount: u64, kind: TransactionType, theme: &Theme) -> Span<'static> {
    let formatted = Amount::new(amount).to_string();
    let (color, sign) = match kind {
        TransactionType::Credit => (theme.positive, "+"),
        TransactionType::Debit => (theme.error, "-"),
    };
    Span::styled(format!("{sign}{formatted}"), Style::default().fg(color))
}

/// Balance in naira; negative balances are shown in the error colour.
#[must_use]
pub fn balance(naira: i64, theme: &Theme) -> Span<'static> {
    let amount = Amount::new(naira.unsigned_abs()).to_string();
    if naira < 0 {
        Span::styled(format!("-{amount}"), Style::default().fg(theme.error))
    } else {
        Span::styled(amount, Style::default().fg(theme.text))
    }
}
