use std::time::{Duration, Instant};

/// Terminal result of a commit attempt, as shown to the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum OutcomeState {
    #[default]
    None,
    Success(String),
    Error(String),
}

impl OutcomeState {
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::None => None,
            Self::Success(message) | Self::Error(message) => Some(message),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// An [`OutcomeState`] that reverts to `None` once its display window lapses.
///
/// Time is passed in explicitly so the owner decides what "now" is; the UI
/// loop calls [`Outcome::tick`] on every frame.
#[derive(Clone, Debug, Default)]
pub struct Outcome {
    state: OutcomeState,
    expires_at: Option<Instant>,
}

impl Outcome {
    /// Shows `state` for `window`, superseding whatever was shown before.
    pub fn show(&mut self, state: OutcomeState, now: Instant, window: Duration) {
        self.expires_at = if state.is_none() { None } else { Some(now + window) };
        self.state = state;
    }

    /// Reverts to `None` once the window has elapsed. Returns `true` when the
    /// state changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.expires_at {
            Some(deadline) if now >= deadline => {
                self.clear();
                true
            }
            _ => false,
        }
    }

    pub fn clear(&mut self) {
        self.state = OutcomeState::None;
        self.expires_at = None;
    }

    pub fn state(&self) -> &OutcomeState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverts_after_window() {
        let start = Instant::now();
        let mut outcome = Outcome::default();
        outcome.show(
            OutcomeState::Success("done".into()),
            start,
            Duration::from_secs(3),
        );

        assert!(!outcome.tick(start + Duration::from_millis(2999)));
        assert_eq!(outcome.state().message(), Some("done"));
        assert!(outcome.tick(start + Duration::from_secs(3)));
        assert!(outcome.state().is_none());
        assert!(!outcome.tick(start + Duration::from_secs(10)));
    }

    #[test]
    fn newer_outcome_restarts_the_window() {
        let start = Instant::now();
        let window = Duration::from_secs(5);
        let mut outcome = Outcome::default();
        outcome.show(OutcomeState::Error("first".into()), start, window);
        outcome.show(
            OutcomeState::Success("second".into()),
            start + Duration::from_secs(4),
            window,
        );

        assert!(!outcome.tick(start + Duration::from_secs(6)));
        assert_eq!(outcome.state(), &OutcomeState::Success("second".into()));
        assert!(outcome.tick(start + Duration::from_secs(9)));
    }
}
