//! Preferences and cached account data that survive restarts.

use api_types::{dashboard::AccountSummary, profile::Profile};
use serde::{Deserialize, Serialize};

use crate::EngineError;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Preferences {
    pub email_notifications: bool,
    pub profile: Option<Profile>,
    pub dashboard: Option<AccountSummary>,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            email_notifications: true,
            profile: None,
            dashboard: None,
        }
    }
}

/// Where [`Preferences`] are kept between runs.
pub trait PreferencesPort {
    /// Returns `None` when nothing has been saved yet.
    fn load(&self) -> Result<Option<Preferences>, EngineError>;
    fn save(&self, prefs: &Preferences) -> Result<(), EngineError>;
}

/// Read once at startup, written through on every change.
#[derive(Debug)]
pub struct AppStateStore<P> {
    port: P,
    current: Preferences,
}

impl<P: PreferencesPort> AppStateStore<P> {
    pub fn open(port: P) -> Result<Self, EngineError> {
        let current = port.load()?.unwrap_or_default();
        Ok(Self { port, current })
    }

    pub fn get(&self) -> &Preferences {
        &self.current
    }

    /// Applies `change` and persists the result if anything differs.
    ///
    /// On a failed save the in-memory state is left untouched.
    pub fn update(&mut self, change: impl FnOnce(&mut Preferences)) -> Result<bool, EngineError> {
        let mut next = self.current.clone();
        change(&mut next);
        if next == self.current {
            return Ok(false);
        }
        self.port.save(&next)?;
        self.current = next;
        Ok(true)
    }
}
