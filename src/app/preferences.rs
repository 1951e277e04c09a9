// SentiView - app/preferences.rs
//
// Preference store: persists the theme choice between application restarts.
// Nothing else about the view survives a restart.
//
// - Saved atomically (write temp, rename) so a crash during save never
//   corrupts the previous good file.
// - Load errors are discarded; a corrupt or incompatible file just means
//   the configured defaults apply.
// - Parsed data is never persisted.

use crate::core::model::Theme;
use crate::util::constants::PREFERENCES_FILE_NAME;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Version stamp for forward-compatibility checks.
///
/// Version mismatches silently discard the stored preferences.
pub const PREFERENCES_VERSION: u32 = 1;

/// Persisted preferences. Unknown keys are ignored on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    /// Schema version; must equal `PREFERENCES_VERSION` to be accepted.
    pub version: u32,

    pub theme: Theme,
}

impl Preferences {
    pub fn new(theme: Theme) -> Self {
        Self {
            version: PREFERENCES_VERSION,
            theme,
        }
    }
}

/// Resolve the preference file path from the platform data directory.
pub fn preferences_path(data_dir: &Path) -> PathBuf {
    data_dir.join(PREFERENCES_FILE_NAME)
}

/// Save `prefs` to `path` atomically.
///
/// Returns a descriptive error string; callers log it and carry on.
pub fn save(prefs: &Preferences, path: &Path) -> Result<(), String> {
    let json = serde_json::to_string_pretty(prefs)
        .map_err(|e| format!("failed to serialise preferences: {e}"))?;

    crate::platform::fs::write_atomic(path, json.as_bytes())
        .map_err(|e| format!("failed to write preferences '{}': {e}", path.display()))?;

    tracing::debug!(path = %path.display(), theme = prefs.theme.label(), "Preferences saved");
    Ok(())
}

/// Load and validate preferences from `path`.
///
/// Returns `None` on any error (file not found, JSON parse failure,
/// version mismatch).
pub fn load(path: &Path) -> Option<Preferences> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::debug!(path = %path.display(), error = %e, "Cannot read preferences");
            }
        })
        .ok()?;

    let prefs: Preferences = serde_json::from_str(&content)
        .map_err(|e| {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "Preferences file is malformed; using defaults"
            );
        })
        .ok()?;

    if prefs.version != PREFERENCES_VERSION {
        tracing::warn!(
            found = prefs.version,
            expected = PREFERENCES_VERSION,
            "Preferences version mismatch; using defaults"
        );
        return None;
    }

    tracing::info!(path = %path.display(), "Preferences loaded");
    Some(prefs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_preferences_save_load() {
        let dir = TempDir::new().unwrap();
        let path = preferences_path(dir.path());
        let prefs = Preferences::new(Theme::Light);

        save(&prefs, &path).expect("save should succeed");
        assert_eq!(load(&path), Some(prefs));
    }

    #[test]
    fn test_missing_file_returns_none() {
        let dir = TempDir::new().unwrap();
        assert!(load(&dir.path().join("nope.json")).is_none());
    }

    #[test]
    fn test_malformed_json_returns_none() {
        let dir = TempDir::new().unwrap();
        let path = preferences_path(dir.path());
        std::fs::write(&path, b"{ theme: ").unwrap();
        assert!(load(&path).is_none());
    }

    #[test]
    fn test_wrong_version_returns_none() {
        let dir = TempDir::new().unwrap();
        let path = preferences_path(dir.path());
        let mut prefs = Preferences::new(Theme::Dark);
        prefs.version = 99;
        save(&prefs, &path).unwrap();
        assert!(load(&path).is_none());
    }

    #[test]
    fn test_only_theme_is_written() {
        let dir = TempDir::new().unwrap();
        let path = preferences_path(dir.path());
        save(&Preferences::new(Theme::Light), &path).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json, serde_json::json!({"version": 1, "theme": "light"}));
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let dir = TempDir::new().unwrap();
        let path = preferences_path(dir.path());
        std::fs::write(&path, br#"{"version":1,"theme":"light","preview_limit":50}"#).unwrap();
        assert_eq!(load(&path), Some(Preferences::new(Theme::Light)));
    }
}
