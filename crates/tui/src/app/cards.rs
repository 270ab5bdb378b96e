//! Card list plus the add/edit form.

use api_types::card::{Card, CardNew, CardStatus};
use engine::{
    format::{self, digits_only},
    forms,
};

use super::{
    App, ToastLevel,
    form::{FieldDef, FieldKind, FormBuffer, FormEdit, FormView},
    message_for_error,
};
use crate::{error::Result, ui::keymap::AppAction};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardsFocus {
    List,
    Form,
}

#[derive(Debug)]
pub struct CardsState {
    pub items: Vec<Card>,
    pub selected: usize,
    pub form: FormBuffer,
    pub view: FormView,
    /// `Some` while editing an existing card, `None` while adding.
    pub editing_id: Option<String>,
    pub focus: CardsFocus,
    pub error: Option<String>,
}

impl CardsState {
    pub fn new() -> Self {
        use forms::card::*;
        Self {
            items: Vec::new(),
            selected: 0,
            form: FormBuffer::default(),
            view: FormView::new(vec![
                FieldDef::new(CARD_NUMBER, "Card number", FieldKind::Digits)
                    .format(format::format_card_input)
                    .max_len(23),
                FieldDef::new(EXPIRY, "Expiry (MM/YY)", FieldKind::Digits)
                    .format(format::format_expiry_input)
                    .max_len(5),
                FieldDef::new(CVV, "CVV", FieldKind::Secret).format(format::format_cvv_input),
            ]),
            editing_id: None,
            focus: CardsFocus::List,
            error: None,
        }
    }

    pub fn set_items(&mut self, items: Vec<Card>) {
        self.items = items;
        self.error = None;
        self.selected = self.selected.min(self.items.len().saturating_sub(1));
    }

    pub fn selected_card(&self) -> Option<&Card> {
        self.items.get(self.selected)
    }

    pub fn start_add(&mut self) {
        self.form.clear();
        self.view.reset_focus();
        self.editing_id = None;
        self.focus = CardsFocus::Form;
    }

    pub fn start_edit(&mut self) {
        let Some(card) = self.selected_card().cloned() else {
            return;
        };
        use forms::card::*;
        self.form.clear();
        self.form
            .values
            .set(CARD_NUMBER, format::format_card_input(&card.card_number));
        self.form.values.set(EXPIRY, card.expiry);
        self.form.values.set(CVV, card.cvv);
        self.view.reset_focus();
        self.editing_id = Some(card.id);
        self.focus = CardsFocus::Form;
    }

    pub fn close_form(&mut self) {
        self.form.clear();
        self.editing_id = None;
        self.focus = CardsFocus::List;
    }

    /// Validated payload, or `None` with the field errors stored.
    /// Saving always (re)activates the card.
    pub fn draft(&mut self) -> Option<CardNew> {
        use forms::card::*;
        if let Err(errors) = forms::card().validate(&self.form.values) {
            self.form.errors = errors;
            return None;
        }
        Some(CardNew {
            card_number: digits_only(self.form.values.get(CARD_NUMBER)),
            expiry: self.form.values.get(EXPIRY).to_string(),
            cvv: self.form.values.get(CVV).to_string(),
            status: CardStatus::Active,
        })
    }

    pub fn select_next(&mut self) {
        if !self.items.is_empty() {
            self.selected = (self.selected + 1).min(self.items.len() - 1);
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }
}

impl Default for CardsState {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub(crate) async fn load_cards(&mut self) {
        match self.client.cards().await {
            Ok(items) => self.state.cards.set_items(items),
            Err(err) => {
                tracing::warn!("failed to load cards: {err}");
                self.state.cards.error = Some(message_for_error(&err));
            }
        }
    }

    pub(crate) async fn handle_cards_key(&mut self, action: AppAction) -> Result<()> {
        if self.state.cards.focus == CardsFocus::Form {
            if action == AppAction::Cancel {
                self.state.cards.close_form();
                return Ok(());
            }
            let cards = &mut self.state.cards;
            if cards.view.handle(action, &mut cards.form) == FormEdit::Submit {
                self.save_card().await;
            }
            return Ok(());
        }

        match action {
            AppAction::Up => self.state.cards.select_prev(),
            AppAction::Down => self.state.cards.select_next(),
            AppAction::Input('a') => self.state.cards.start_add(),
            AppAction::Input('e') => self.state.cards.start_edit(),
            AppAction::Input('b') => self.block_selected_card().await,
            AppAction::Input('d') => self.delete_selected_card().await,
            AppAction::Input('r') => self.load_cards().await,
            _ => {}
        }
        Ok(())
    }

    async fn save_card(&mut self) {
        let Some(draft) = self.state.cards.draft() else {
            return;
        };
        let result = match self.state.cards.editing_id.clone() {
            Some(id) => self.client.replace_card(&id, &draft).await,
            None => self.client.create_card(&draft).await,
        };
        match result {
            Ok(card) => {
                tracing::info!(id = %card.id, "card saved");
                self.state.cards.close_form();
                self.state.toast(ToastLevel::Success, "Card saved.");
                self.load_cards().await;
            }
            Err(err) => {
                tracing::warn!("failed to save card: {err}");
                self.state.cards.error = Some(message_for_error(&err));
            }
        }
    }

    async fn block_selected_card(&mut self) {
        let Some(id) = self.state.cards.selected_card().map(|c| c.id.clone()) else {
            return;
        };
        match self.client.block_card(&id).await {
            Ok(_) => {
                self.state.toast(ToastLevel::Info, "Card blocked.");
                self.load_cards().await;
            }
            Err(err) => self.state.cards.error = Some(message_for_error(&err)),
        }
    }

    async fn delete_selected_card(&mut self) {
        let Some(id) = self.state.cards.selected_card().map(|c| c.id.clone()) else {
            return;
        };
        match self.client.delete_card(&id).await {
            Ok(()) => {
                self.state.toast(ToastLevel::Info, "Card deleted.");
                self.load_cards().await;
            }
            Err(err) => self.state.cards.error = Some(message_for_error(&err)),
        }
    }
}
