//! Domain core of the SkyBank demo.
//!
//! Every money-moving screen runs the same confirmation protocol:
//! validate the form ([`Schema`]), ask for a PIN ([`PinChallenge`]), commit
//! through a [`TransactionSubmitter`], then show a timed [`OutcomeState`].
//! The per-screen state lives in [`TransactionFlow`].
//!
//! I/O only happens through [`TransactionStore`] and [`PreferencesPort`].

pub use error::EngineError;
pub use flow::{FlowKind, PendingCommit, TransactionDraft, TransactionFlow};
pub use money::Amount;
pub use outcome::{Outcome, OutcomeState};
pub use pin::{CancelReason, PinChallenge, PinState, UiLock, UiLockGuard};
pub use prefs::{AppStateStore, Preferences, PreferencesPort};
pub use submit::{CommitReceipt, SubmitPolicy, TransactionStore, TransactionSubmitter};
pub use validation::{FieldSpec, FormState, Rule, Schema, ValidationErrors};

pub mod error;
pub mod flow;
pub mod format;
pub mod forms;
pub mod money;
pub mod outcome;
pub mod pin;
pub mod prefs;
pub mod submit;
pub mod validation;
