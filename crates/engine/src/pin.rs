//! PIN challenge shown between a validated form and its commit.

use std::{
    fmt,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};

use crate::error::{EngineError, PIN_FORMAT_MESSAGE};

pub const PIN_MIN_LEN: usize = 4;
pub const PIN_MAX_LEN: usize = 6;

/// Shared flag that suppresses background scrolling and navigation while any
/// modal holds a guard.
#[derive(Clone, Debug, Default)]
pub struct UiLock {
    holders: Arc<AtomicUsize>,
}

impl UiLock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn acquire(&self) -> UiLockGuard {
        self.holders.fetch_add(1, Ordering::SeqCst);
        UiLockGuard {
            holders: Arc::clone(&self.holders),
        }
    }

    pub fn is_held(&self) -> bool {
        self.holders.load(Ordering::SeqCst) > 0
    }
}

/// Releases its hold on the [`UiLock`] when dropped.
#[derive(Debug)]
pub struct UiLockGuard {
    holders: Arc<AtomicUsize>,
}

impl Drop for UiLockGuard {
    fn drop(&mut self) {
        self.holders.fetch_sub(1, Ordering::SeqCst);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CancelReason {
    Button,
    Backdrop,
    Escape,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PinState {
    #[default]
    Closed,
    Open,
    Confirmed,
    Cancelled(CancelReason),
}

/// `Closed -> Open -> {Confirmed | Cancelled}`.
///
/// The typed PIN lives only while the challenge is open and is wiped on every
/// exit, together with the inline error.
#[derive(Default)]
pub struct PinChallenge {
    state: PinState,
    pin: String,
    error: Option<&'static str>,
    lock: UiLock,
    guard: Option<UiLockGuard>,
}

impl PinChallenge {
    pub fn new(lock: UiLock) -> Self {
        Self {
            lock,
            ..Self::default()
        }
    }

    pub fn open(&mut self) {
        self.wipe();
        self.state = PinState::Open;
        if self.guard.is_none() {
            self.guard = Some(self.lock.acquire());
        }
    }

    /// Appends typed input; non-digits are discarded and the PIN never grows
    /// past six digits.
    pub fn push_digit(&mut self, ch: char) {
        if !self.is_open() {
            return;
        }
        self.error = None;
        if ch.is_ascii_digit() && self.pin.len() < PIN_MAX_LEN {
            self.pin.push(ch);
        }
    }

    pub fn backspace(&mut self) {
        if self.is_open() {
            self.error = None;
            self.pin.pop();
        }
    }

    /// Checks the PIN format. On success the challenge closes and the PIN is
    /// handed to the caller; on failure it stays open with an inline error.
    pub fn confirm(&mut self) -> Result<String, EngineError> {
        if !self.is_open() {
            return Err(EngineError::ChallengeClosed);
        }
        if !is_valid_pin(&self.pin) {
            self.error = Some(PIN_FORMAT_MESSAGE);
            return Err(EngineError::PinFormatInvalid);
        }
        let pin = std::mem::take(&mut self.pin);
        self.close(PinState::Confirmed);
        Ok(pin)
    }

    pub fn cancel(&mut self, reason: CancelReason) {
        if self.is_open() {
            tracing::debug!(?reason, "pin challenge cancelled");
            self.close(PinState::Cancelled(reason));
        }
    }

    pub fn state(&self) -> PinState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == PinState::Open
    }

    pub fn error(&self) -> Option<&str> {
        self.error
    }

    /// Number of typed digits, for masked rendering.
    pub fn len(&self) -> usize {
        self.pin.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pin.is_empty()
    }

    fn close(&mut self, state: PinState) {
        self.wipe();
        self.state = state;
        self.guard = None;
    }

    fn wipe(&mut self) {
        self.pin.clear();
        self.error = None;
    }
}

impl fmt::Debug for PinChallenge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PinChallenge")
            .field("state", &self.state)
            .field("pin", &"<redacted>")
            .field("error", &self.error)
            .finish()
    }
}

/// `^\d{4,6}$`
pub fn is_valid_pin(pin: &str) -> bool {
    (PIN_MIN_LEN..=PIN_MAX_LEN).contains(&pin.len()) && pin.bytes().all(|b| b.is_ascii_digit())
}
