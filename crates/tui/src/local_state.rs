use std::{fs, path::PathBuf};

use engine::{EngineError, Preferences, PreferencesPort};

/// JSON file holding the user's [`Preferences`] between runs.
#[derive(Debug, Clone)]
pub struct FilePreferences {
    path: PathBuf,
}

impl FilePreferences {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

fn persistence(err: impl std::fmt::Display) -> EngineError {
    EngineError::Persistence(err.to_string())
}

impl PreferencesPort for FilePreferences {
    fn load(&self) -> Result<Option<Preferences>, EngineError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(persistence(err)),
        };
        serde_json::from_str(&content).map(Some).map_err(persistence)
    }

    fn save(&self, prefs: &Preferences) -> Result<(), EngineError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(persistence)?;
        }
        let payload = serde_json::to_string_pretty(prefs).map_err(persistence)?;
        fs::write(&self.path, payload).map_err(persistence)
    }
}

#[cfg(test)]
mod tests {
    use engine::AppStateStore;

    use super::*;

    fn temp_path() -> PathBuf {
        std::env::temp_dir()
            .join(format!("skybank_tui_{}", uuid::Uuid::new_v4()))
            .join("state.json")
    }

    #[test]
    fn missing_file_loads_as_none() {
        let port = FilePreferences::new(temp_path());
        assert_eq!(port.load().unwrap(), None);
    }

    #[test]
    fn toggle_survives_restart() {
        let path = temp_path();
        let mut store = AppStateStore::open(FilePreferences::new(&path)).unwrap();
        store.update(|p| p.email_notifications = false).unwrap();

        let reopened = AppStateStore::open(FilePreferences::new(&path)).unwrap();
        assert!(!reopened.get().email_notifications);
        fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }

    #[test]
    fn corrupt_file_is_a_persistence_error() {
        let path = temp_path();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "not json").unwrap();
        let err = FilePreferences::new(&path).load().unwrap_err();
        assert!(matches!(err, EngineError::Persistence(_)));
        fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }
}
