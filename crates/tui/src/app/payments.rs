//! Transfer and airtime screens: form, PIN modal, commit hand-off.

use engine::{
    CancelReason, EngineError, PendingCommit, TransactionFlow, UiLock,
    forms::{self, BANKS, NETWORKS},
};

use super::form::{FieldDef, FieldKind, FormEdit, FormView};
use crate::ui::keymap::AppAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinButton {
    Confirm,
    Cancel,
}

/// What the caller should do after a key reached a payment screen.
#[derive(Debug)]
pub enum PaymentStep {
    None,
    Commit(PendingCommit),
    Failed(EngineError),
}

#[derive(Debug)]
pub struct PaymentState {
    pub flow: TransactionFlow,
    pub view: FormView,
    pub pin_focus: PinButton,
}

impl PaymentState {
    pub fn transfer(lock: UiLock) -> Self {
        use forms::transfer::*;
        Self {
            flow: TransactionFlow::transfer().with_lock(lock),
            view: FormView::new(vec![
                FieldDef::new(ACCOUNT_NUMBER, "Account number", FieldKind::Digits).max_len(10),
                FieldDef::new(BANK_NAME, "Bank", FieldKind::Select(BANKS)),
                FieldDef::new(RECIPIENT_NAME, "Recipient name", FieldKind::Text),
                FieldDef::new(AMOUNT, "Amount (₦)", FieldKind::Text),
                FieldDef::new(NARRATION, "Narration", FieldKind::Text),
            ]),
            pin_focus: PinButton::Confirm,
        }
    }

    pub fn airtime(lock: UiLock) -> Self {
        use forms::airtime::*;
        Self {
            flow: TransactionFlow::airtime().with_lock(lock),
            view: FormView::new(vec![
                FieldDef::new(PHONE, "Phone number", FieldKind::Text).max_len(14),
                FieldDef::new(NETWORK, "Network", FieldKind::Select(NETWORKS)),
                FieldDef::new(AMOUNT, "Amount (₦)", FieldKind::Text),
            ]),
            pin_focus: PinButton::Confirm,
        }
    }

    pub fn handle(&mut self, action: AppAction) -> PaymentStep {
        if self.flow.pin().is_open() {
            return self.handle_pin(action);
        }
        if self.flow.is_processing() {
            return PaymentStep::None;
        }
        if self.view.handle(action, &mut self.flow) == FormEdit::Submit {
            match self.flow.request_confirmation() {
                Ok(()) => self.pin_focus = PinButton::Confirm,
                Err(EngineError::ValidationFailed(_)) => {}
                Err(err) => return PaymentStep::Failed(err),
            }
        }
        PaymentStep::None
    }

    fn handle_pin(&mut self, action: AppAction) -> PaymentStep {
        match action {
            AppAction::Input(ch) => self.flow.pin_mut().push_digit(ch),
            AppAction::Backspace => self.flow.pin_mut().backspace(),
            AppAction::NextField | AppAction::PrevField | AppAction::Left | AppAction::Right => {
                self.pin_focus = match self.pin_focus {
                    PinButton::Confirm => PinButton::Cancel,
                    PinButton::Cancel => PinButton::Confirm,
                };
            }
            AppAction::Cancel => self.flow.cancel_pin(CancelReason::Escape),
            AppAction::Submit if self.pin_focus == PinButton::Cancel => {
                self.flow.cancel_pin(CancelReason::Button);
            }
            AppAction::Submit => match self.flow.confirm_pin() {
                Ok(pending) => return PaymentStep::Commit(pending),
                // Shown inline in the modal.
                Err(EngineError::PinFormatInvalid) => {}
                Err(err) => return PaymentStep::Failed(err),
            },
            _ => {}
        }
        PaymentStep::None
    }

    /// Click outside the PIN modal.
    pub fn backdrop_click(&mut self) {
        self.flow.cancel_pin(CancelReason::Backdrop);
    }
}
