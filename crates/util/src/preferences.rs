//! Saved user preferences.
//!
//! Palazzo remembers exactly one thing between runs: which theme the user
//! last picked. That fits in a small JSON document under the platform config
//! directory (`~/.config/palazzo/preferences.json` on Linux), loaded once at
//! startup and rewritten whenever the theme changes. A missing or unreadable
//! file is never fatal; the app just starts with defaults.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use dirs_next::config_dir;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::expand_tilde;

/// Overrides where the preferences file lives.
pub const PREFERENCES_PATH_ENV: &str = "PALAZZO_PREFERENCES_PATH";

const FILE_NAME: &str = "preferences.json";

/// Failure while writing preferences back to disk.
#[derive(Debug, Error)]
pub enum PreferencesError {
    #[error("could not write preferences: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not encode preferences: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Everything Palazzo persists between runs.
///
/// Unknown fields in the file are ignored and missing ones default, so old
/// and new binaries can share the same file.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    /// Canonical id of the last theme the user cycled to.
    pub theme: Option<String>,
}

impl Preferences {
    /// Loads preferences from the default location. Any problem reading or
    /// parsing the file degrades to defaults with a warning.
    pub fn load() -> Self {
        Self::load_from(&preferences_path())
    }

    /// Loads from an explicit path.
    pub fn load_from(path: &Path) -> Self {
        let data = match fs::read_to_string(path) {
            Ok(data) => data,
            Err(error) => {
                if error.kind() != std::io::ErrorKind::NotFound {
                    warn!(path = %path.display(), %error, "could not read preferences; starting fresh");
                }
                return Self::default();
            }
        };
        serde_json::from_str(&data).unwrap_or_else(|error| {
            warn!(path = %path.display(), %error, "preferences file is not valid JSON; starting fresh");
            Self::default()
        })
    }

    /// Writes preferences to the default location, creating parent
    /// directories as needed.
    pub fn save(&self) -> Result<(), PreferencesError> {
        self.save_to(&preferences_path())
    }

    /// Writes to an explicit path.
    pub fn save_to(&self, path: &Path) -> Result<(), PreferencesError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

/// Where the preferences file lives: the env override when set, otherwise
/// the platform config directory.
pub fn preferences_path() -> PathBuf {
    if let Ok(path) = env::var(PREFERENCES_PATH_ENV)
        && !path.trim().is_empty()
    {
        return expand_tilde(path.trim());
    }
    config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("palazzo")
        .join(FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn saved_theme_survives_a_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(FILE_NAME);

        let prefs = Preferences {
            theme: Some("verdura".into()),
        };
        prefs.save_to(&path).unwrap();
        assert_eq!(Preferences::load_from(&path), prefs);
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempdir().unwrap();
        let loaded = Preferences::load_from(&dir.path().join("nowhere.json"));
        assert_eq!(loaded, Preferences::default());
    }

    #[test]
    fn invalid_json_loads_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(FILE_NAME);
        fs::write(&path, "{not json").unwrap();
        assert_eq!(Preferences::load_from(&path), Preferences::default());
    }

    #[test]
    fn unknown_fields_are_tolerated() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(FILE_NAME);
        fs::write(&path, r#"{"theme":"marinara","cellar_door":true}"#).unwrap();
        let loaded = Preferences::load_from(&path);
        assert_eq!(loaded.theme.as_deref(), Some("marinara"));
    }

    #[test]
    fn save_creates_missing_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("deep").join("nested").join(FILE_NAME);
        Preferences::default().save_to(&path).unwrap();
        assert!(path.exists());
    }
}
