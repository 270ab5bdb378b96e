//! Per-screen state of the transaction-confirmation protocol.

use std::time::{Duration, Instant};

use crate::{
    Amount, EngineError,
    format::format_phone,
    forms::{self, NETWORKS, label_for},
    outcome::{Outcome, OutcomeState},
    pin::{CancelReason, PinChallenge, UiLock},
    validation::{FormState, Schema, ValidationErrors, parse_number},
};

/// Name of the amount field, shared by every transaction form.
pub const AMOUNT_FIELD: &str = "amount";

pub const TRANSFER_WINDOW: Duration = Duration::from_secs(3);
pub const AIRTIME_WINDOW: Duration = Duration::from_secs(5);

/// Text derived from the form once the PIN is accepted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransactionDraft {
    pub description: String,
    pub success_message: String,
}

pub type DraftBuilder = fn(&FormState, Amount) -> TransactionDraft;

/// Everything the submitter needs, detached from the flow so it can be moved
/// onto another task.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingCommit {
    pub amount: Amount,
    pub ceiling: Amount,
    pub draft: TransactionDraft,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlowKind {
    Transfer,
    Airtime,
}

#[derive(Debug)]
pub struct TransactionFlow {
    kind: FlowKind,
    schema: Schema,
    builder: DraftBuilder,
    ceiling: Amount,
    display_window: Duration,
    form: FormState,
    errors: ValidationErrors,
    pin: PinChallenge,
    processing: bool,
    outcome: Outcome,
}

impl TransactionFlow {
    pub fn new(
        kind: FlowKind,
        schema: Schema,
        builder: DraftBuilder,
        ceiling: Amount,
        display_window: Duration,
    ) -> Self {
        Self {
            kind,
            schema,
            builder,
            ceiling,
            display_window,
            form: FormState::default(),
            errors: ValidationErrors::default(),
            pin: PinChallenge::default(),
            processing: false,
            outcome: Outcome::default(),
        }
    }

    pub fn transfer() -> Self {
        Self::new(
            FlowKind::Transfer,
            forms::transfer(),
            transfer_draft,
            Amount::SINGLE_TRANSACTION_CEILING,
            TRANSFER_WINDOW,
        )
    }

    pub fn airtime() -> Self {
        Self::new(
            FlowKind::Airtime,
            forms::airtime(),
            airtime_draft,
            Amount::SINGLE_TRANSACTION_CEILING,
            AIRTIME_WINDOW,
        )
    }

    /// Shares `lock` with the PIN challenge so the UI can tell when a modal is up.
    pub fn with_lock(mut self, lock: UiLock) -> Self {
        self.pin = PinChallenge::new(lock);
        self
    }

    /// Updates one field and drops its stale error.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) {
        self.form.set(name, value);
        self.errors.clear_field(name);
    }

    /// Validates the whole form and opens the PIN challenge when it passes.
    pub fn request_confirmation(&mut self) -> Result<(), EngineError> {
        if self.processing {
            return Err(EngineError::SubmitInProgress);
        }
        self.outcome.clear();
        match self.schema.validate(&self.form) {
            Ok(()) => {
                self.errors.clear();
                self.pin.open();
                Ok(())
            }
            Err(errors) => {
                tracing::debug!(kind = ?self.kind, fields = errors.len(), "form rejected");
                self.errors = errors.clone();
                Err(EngineError::ValidationFailed(errors))
            }
        }
    }

    /// Confirms the PIN and marks the flow as processing.
    pub fn confirm_pin(&mut self) -> Result<PendingCommit, EngineError> {
        if self.processing {
            return Err(EngineError::SubmitInProgress);
        }
        self.pin.confirm()?;

        let raw = self.form.get(AMOUNT_FIELD);
        let Some(amount) = parse_number(raw).filter(|n| *n >= 0.0) else {
            let mut errors = ValidationErrors::default();
            errors.insert(AMOUNT_FIELD, "Amount must be a number.");
            self.errors = errors.clone();
            return Err(EngineError::ValidationFailed(errors));
        };
        let amount = Amount::new(amount as u64);

        self.processing = true;
        Ok(PendingCommit {
            amount,
            ceiling: self.ceiling,
            draft: (self.builder)(&self.form, amount),
        })
    }

    pub fn cancel_pin(&mut self, reason: CancelReason) {
        self.pin.cancel(reason);
    }

    /// Applies the result of a commit attempt.
    ///
    /// Success clears the form; failure keeps it so the user can retry. Either
    /// way the outcome is shown for the flow's display window.
    pub fn finish(&mut self, result: Result<String, EngineError>, now: Instant) {
        self.processing = false;
        let state = match result {
            Ok(message) => {
                self.form.clear();
                self.errors.clear();
                OutcomeState::Success(message)
            }
            Err(err) => {
                tracing::warn!(kind = ?self.kind, error = %err, "commit failed");
                OutcomeState::Error(err.user_message())
            }
        };
        self.outcome.show(state, now, self.display_window);
    }

    /// Advances the outcome timer; returns `true` when it reverted.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.outcome.tick(now)
    }

    pub fn kind(&self) -> FlowKind {
        self.kind
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn pin(&self) -> &PinChallenge {
        &self.pin
    }

    pub fn pin_mut(&mut self) -> &mut PinChallenge {
        &mut self.pin
    }

    pub fn is_processing(&self) -> bool {
        self.processing
    }

    pub fn outcome(&self) -> &OutcomeState {
        self.outcome.state()
    }

    pub fn display_window(&self) -> Duration {
        self.display_window
    }

    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.schema.field_names()
    }
}

fn transfer_draft(form: &FormState, amount: Amount) -> TransactionDraft {
    let recipient = form.get(forms::transfer::RECIPIENT_NAME).trim();
    let account = form.get(forms::transfer::ACCOUNT_NUMBER);
    TransactionDraft {
        description: format!("Transfer to {recipient} ({account})"),
        success_message: format!(
            "Transfer of {amount} to {recipient} ({account}) was successful."
        ),
    }
}

fn airtime_draft(form: &FormState, amount: Amount) -> TransactionDraft {
    let phone = format_phone(form.get(forms::airtime::PHONE).trim());
    let network = label_for(NETWORKS, form.get(forms::airtime::NETWORK));
    TransactionDraft {
        description: format!("Airtime purchase to {phone} ({network})"),
        success_message: format!(
            "Airtime purchase of {amount} to {phone} ({network}) was successful."
        ),
    }
}
