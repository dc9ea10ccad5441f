use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::app::domain::settings::AppSettings;
use crate::app::infrastructure::error::{AppError, Result};

/// Settings loaded from disk plus the file they are persisted to.
///
/// The in-memory copy only changes after the file has been rewritten, so it
/// always mirrors the last value successfully written.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
    settings: AppSettings,
}

impl SettingsStore {
    /// Load from the default config location.
    pub fn load() -> Self {
        Self::load_from(Self::default_path())
    }

    /// Load settings from `path`. Never fails: a missing file yields the
    /// defaults (written back for next time). A malformed or unreadable one
    /// yields the defaults and is left alone.
    pub fn load_from(path: PathBuf) -> Self {
        let settings = match fs::read_to_string(&path) {
            Ok(contents) => match AppSettings::from_toml_str(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    tracing::warn!("Failed to parse {}: {}. Using defaults.", path.display(), e);
                    AppSettings::default()
                }
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                let default = AppSettings::default();
                if let Err(e) = write_settings(&path, &default) {
                    tracing::warn!("Could not write default settings: {}", e);
                }
                default
            }
            Err(e) => {
                tracing::warn!("Failed to read {}: {}. Using defaults.", path.display(), e);
                AppSettings::default()
            }
        };
        tracing::info!(
            theme = settings.theme().as_str(),
            lang = settings.language().code(),
            "Loaded settings"
        );
        Self { path, settings }
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    /// Apply `change` to a copy of the settings, rewrite the whole file and
    /// only then commit the copy. On error nothing in memory changes.
    pub fn update<F>(&mut self, change: F) -> Result<()>
    where
        F: FnOnce(&mut AppSettings),
    {
        let mut next = self.settings;
        change(&mut next);
        write_settings(&self.path, &next)?;
        self.settings = next;
        Ok(())
    }

    /// Get config file path (cross-platform)
    pub fn default_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("pandapad");
        path.push("settings.toml");
        path
    }
}

fn write_settings(path: &Path, settings: &AppSettings) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| AppError::io(parent, e))?;
    }
    let contents = settings.to_toml_string()?;
    fs::write(path, contents).map_err(|e| AppError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::{Language, Theme};
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_writes_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pandapad").join("settings.toml");
        let store = SettingsStore::load_from(path.clone());
        assert_eq!(*store.settings(), AppSettings::default());
        assert!(path.exists());
    }

    #[test]
    fn test_theme_survives_restart() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.toml");

        let mut store = SettingsStore::load_from(path.clone());
        store.update(|s| s.style.color_scheme = Theme::Light).unwrap();
        assert_eq!(store.settings().theme(), Theme::Light);

        let reloaded = SettingsStore::load_from(path.clone());
        assert_eq!(reloaded.settings().theme(), Theme::Light);

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("COLOR_SCHEME = \"Light\""));
    }

    #[test]
    fn test_language_survives_restart() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.toml");

        let mut store = SettingsStore::load_from(path.clone());
        store.update(|s| s.lang.lang = Language::Ru).unwrap();

        let reloaded = SettingsStore::load_from(path);
        assert_eq!(reloaded.settings().language(), Language::Ru);
        assert_eq!(reloaded.settings().theme(), Theme::Dark);
    }

    #[test]
    fn test_malformed_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "[style]\nCOLOR_SCHEME = \"Purple\"\n").unwrap();

        let store = SettingsStore::load_from(path.clone());
        assert_eq!(*store.settings(), AppSettings::default());
        // Left alone so the user can fix it
        assert!(fs::read_to_string(&path).unwrap().contains("Purple"));
    }

    #[test]
    fn test_non_utf8_file_is_not_overwritten() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        let bytes: &[u8] = b"[style]\n# \xff\xfe\n";
        fs::write(&path, bytes).unwrap();

        let store = SettingsStore::load_from(path.clone());
        assert_eq!(*store.settings(), AppSettings::default());
        assert_eq!(fs::read(&path).unwrap(), bytes);
    }

    #[test]
    fn test_failed_write_keeps_previous_value() {
        let dir = tempdir().unwrap();
        // A directory where the file should be makes every write fail
        let path = dir.path().join("settings.toml");
        fs::create_dir(&path).unwrap();

        let mut store = SettingsStore::load_from(path);
        assert_eq!(store.settings().theme(), Theme::Dark);

        let result = store.update(|s| s.style.color_scheme = Theme::Light);
        assert!(matches!(result, Err(AppError::Io { .. })));
        assert_eq!(store.settings().theme(), Theme::Dark);
    }
}
