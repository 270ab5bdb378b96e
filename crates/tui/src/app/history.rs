//! Transaction history with type and date filters.

use api_types::transaction::{TransactionRecord, TransactionType};
use chrono::NaiveDate;

use super::{App, message_for_error};
use crate::{error::Result, ui::keymap::AppAction};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TypeFilter {
    #[default]
    All,
    Credit,
    Debit,
}

impl TypeFilter {
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Credit => "Credit",
            Self::Debit => "Debit",
        }
    }

    fn next(self) -> Self {
        match self {
            Self::All => Self::Credit,
            Self::Credit => Self::Debit,
            Self::Debit => Self::All,
        }
    }

    fn accepts(self, kind: TransactionType) -> bool {
        match self {
            Self::All => true,
            Self::Credit => kind == TransactionType::Credit,
            Self::Debit => kind == TransactionType::Debit,
        }
    }
}

#[derive(Debug, Default)]
pub struct HistoryState {
    pub items: Vec<TransactionRecord>,
    pub type_filter: TypeFilter,
    /// Raw `YYYY-MM-DD` input; only applied once it parses.
    pub date_input: String,
    pub editing_date: bool,
    pub selected: usize,
    pub error: Option<String>,
    /// Set when a commit may have added records since the last load.
    pub stale: bool,
}

impl HistoryState {
    pub fn set_items(&mut self, items: Vec<TransactionRecord>) {
        self.items = items;
        self.error = None;
        self.stale = false;
        self.clamp_selection();
    }

    pub fn date_filter(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date_input.trim(), "%Y-%m-%d").ok()
    }

    /// Newest first, filtered by type and exact date.
    pub fn visible(&self) -> Vec<&TransactionRecord> {
        let date = self.date_filter();
        let mut rows: Vec<&TransactionRecord> = self
            .items
            .iter()
            .filter(|tx| self.type_filter.accepts(tx.kind))
            .filter(|tx| date.is_none_or(|d| tx.date == d))
            .collect();
        rows.sort_by(|a, b| b.id.cmp(&a.id));
        rows
    }

    pub fn cycle_type(&mut self) {
        self.type_filter = self.type_filter.next();
        self.selected = 0;
    }

    pub fn push_date_char(&mut self, ch: char) {
        if (ch.is_ascii_digit() || ch == '-') && self.date_input.len() < 10 {
            self.date_input.push(ch);
            self.selected = 0;
        }
    }

    pub fn pop_date_char(&mut self) {
        self.date_input.pop();
    }

    pub fn clear_filters(&mut self) {
        self.type_filter = TypeFilter::All;
        self.date_input.clear();
        self.editing_date = false;
        self.selected = 0;
    }

    pub fn select_next(&mut self) {
        let len = self.visible().len();
        if len > 0 {
            self.selected = (self.selected + 1).min(len - 1);
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        let len = self.visible().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }
}

impl App {
    pub(crate) async fn load_transactions(&mut self) {
        match self.client.transactions().await {
            Ok(items) => self.state.history.set_items(items),
            Err(err) => {
                tracing::warn!("failed to load transactions: {err}");
                self.state.history.error = Some(message_for_error(&err));
            }
        }
    }

    pub(crate) async fn handle_history_key(&mut self, action: AppAction) -> Result<()> {
        let history = &mut self.state.history;
        if history.editing_date {
            match action {
                AppAction::Input(ch) => history.push_date_char(ch),
                AppAction::Backspace => history.pop_date_char(),
                AppAction::Submit | AppAction::Cancel => history.editing_date = false,
                _ => {}
            }
            return Ok(());
        }
        match action {
            AppAction::Up => history.select_prev(),
            AppAction::Down => history.select_next(),
            AppAction::Input('t') => history.cycle_type(),
            AppAction::Input('d') => history.editing_date = true,
            AppAction::Input('c') => history.clear_filters(),
            AppAction::Input('r') => self.load_transactions().await,
            _ => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, kind: TransactionType, date: &str) -> TransactionRecord {
        TransactionRecord {
            id,
            kind,
            amount: 100,
            description: format!("tx {id}"),
            date: date.parse().unwrap(),
        }
    }

    fn history() -> HistoryState {
        let mut state = HistoryState::default();
        state.set_items(vec![
            record(1, TransactionType::Credit, "2025-01-01"),
            record(3, TransactionType::Debit, "2025-01-03"),
            record(2, TransactionType::Debit, "2025-01-01"),
        ]);
        state
    }

    fn ids(state: &HistoryState) -> Vec<i64> {
        state.visible().iter().map(|tx| tx.id).collect()
    }

    #[test]
    fn newest_first() {
        assert_eq!(ids(&history()), [3, 2, 1]);
    }

    #[test]
    fn type_filter_cycles() {
        let mut state = history();
        state.cycle_type();
        assert_eq!(ids(&state), [1]);
        state.cycle_type();
        assert_eq!(ids(&state), [3, 2]);
        state.cycle_type();
        assert_eq!(state.type_filter, TypeFilter::All);
    }

    #[test]
    fn date_filter_applies_once_complete() {
        let mut state = history();
        "2025-01".chars().for_each(|c| state.push_date_char(c));
        assert_eq!(ids(&state).len(), 3);
        "-01".chars().for_each(|c| state.push_date_char(c));
        assert_eq!(ids(&state), [2, 1]);

        state.cycle_type();
        assert_eq!(ids(&state), [1]);

        state.clear_filters();
        assert_eq!(ids(&state).len(), 3);
    }

    #[test]
    fn selection_stays_in_range() {
        let mut state = history();
        for _ in 0..5 {
            state.select_next();
        }
        assert_eq!(state.selected, 2);
        state.set_items(vec![record(9, TransactionType::Debit, "2025-02-01")]);
        assert_eq!(state.selected, 0);
    }
}
