//! The module contains the errors the engine can throw.
//!
//! The transaction-confirmation errors are:
//!
//! - [`ValidationFailed`] thrown when a form fails its schema.
//! - [`PinFormatInvalid`] thrown when the PIN is not 4 to 6 digits.
//! - [`AmountOverCeiling`] thrown when the amount exceeds the single-transaction limit.
//! - [`StoreWriteFailed`] thrown when the store rejects or never receives the record.
//!
//! None of them is fatal: every screen recovers locally and the user may retry.
//!
//!  [`ValidationFailed`]: EngineError::ValidationFailed
//!  [`PinFormatInvalid`]: EngineError::PinFormatInvalid
//!  [`AmountOverCeiling`]: EngineError::AmountOverCeiling
//!  [`StoreWriteFailed`]: EngineError::StoreWriteFailed
use thiserror::Error;

use crate::{Amount, validation::ValidationErrors};

pub const PIN_FORMAT_MESSAGE: &str = "Enter a 4-6 digit PIN.";
pub const OVER_CEILING_MESSAGE: &str = "Amount exceeds single-transaction limit.";
pub const STORE_WRITE_MESSAGE: &str = "Transaction failed to save.";

/// Engine custom errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("validation failed on {} field(s)", .0.len())]
    ValidationFailed(ValidationErrors),
    #[error("Enter a 4-6 digit PIN.")]
    PinFormatInvalid,
    #[error("Amount exceeds single-transaction limit ({amount} > {ceiling})")]
    AmountOverCeiling { amount: Amount, ceiling: Amount },
    #[error("store write failed: {0}")]
    StoreWriteFailed(String),
    #[error("a submission is already in progress")]
    SubmitInProgress,
    #[error("no PIN challenge is open")]
    ChallengeClosed,
    #[error("preferences: {0}")]
    Persistence(String),
}

impl EngineError {
    /// Message shown to the user when the error ends a commit attempt.
    pub fn user_message(&self) -> String {
        match self {
            Self::ValidationFailed(_) => "Please fix the highlighted fields.".to_string(),
            Self::PinFormatInvalid => PIN_FORMAT_MESSAGE.to_string(),
            Self::AmountOverCeiling { .. } => OVER_CEILING_MESSAGE.to_string(),
            Self::StoreWriteFailed(_) => STORE_WRITE_MESSAGE.to_string(),
            Self::SubmitInProgress => "Processing...".to_string(),
            Self::ChallengeClosed => "Confirmation was cancelled.".to_string(),
            Self::Persistence(message) => format!("Could not save preferences: {message}"),
        }
    }
}
