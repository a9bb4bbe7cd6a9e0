//! Game settings and preferences
//!
//! Stored as a small JSON file. Missing fields take their defaults so older
//! files keep loading.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::{BestOf, MatchConfig};
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::error::SettingsError;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Match ===
    pub screen_width: u32,
    pub screen_height: u32,
    /// Match length for the first game; the replay menu can change it
    pub best_of: BestOf,
    /// Fixed serve seed. `None` picks a fresh one each run.
    pub seed: Option<u64>,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            best_of: BestOf::default(),
            seed: None,

            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }
}

impl Settings {
    /// Validated match configuration for these settings
    pub fn match_config(&self) -> Result<MatchConfig, SettingsError> {
        Ok(MatchConfig::new(self.screen_width, self.screen_height, self.best_of)?)
    }

    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.match_config()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read and validate settings from a JSON file
    pub fn try_load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path.as_ref())?;
        Self::from_json(&json)
    }

    /// Load settings, falling back to defaults if the file is missing or bad
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::try_load(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Using default settings ({}): {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let path = path.as_ref();
        fs::write(path, self.to_json()?)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("ping_pong_{}_{}.json", name, std::process::id()))
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        let config = settings.match_config().unwrap();
        assert_eq!(config, MatchConfig::default());
        assert_eq!(settings.seed, None);
        assert_eq!(settings.master_volume, 0.8);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = Settings::from_json(r#"{ "best_of": 7, "seed": 42 }"#).unwrap();
        assert_eq!(settings.best_of, BestOf::Seven);
        assert_eq!(settings.seed, Some(42));
        assert_eq!(settings.screen_width, 800);
        assert!(!settings.muted);
    }

    #[test]
    fn test_invalid_best_of_rejected() {
        let err = Settings::from_json(r#"{ "best_of": 4 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_invalid_geometry_rejected() {
        let err = Settings::from_json(r#"{ "screen_height": 0 }"#).unwrap_err();
        assert!(matches!(
            err,
            SettingsError::Invalid(ConfigError::ZeroDimension { .. })
        ));
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_path("save");
        let settings = Settings {
            best_of: BestOf::Three,
            seed: Some(7),
            muted: true,
            ..Settings::default()
        };
        settings.save(&path).unwrap();
        let loaded = Settings::try_load(&path).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_load_falls_back() {
        let missing = temp_path("missing");
        assert!(matches!(
            Settings::try_load(&missing),
            Err(SettingsError::Io(_))
        ));
        assert_eq!(Settings::load(&missing), Settings::default());

        let garbled = temp_path("garbled");
        fs::write(&garbled, "{ \"best_of\": 3, ").unwrap();
        let result = Settings::try_load(&garbled);
        let fallback = Settings::load(&garbled);
        let _ = fs::remove_file(&garbled);

        assert!(matches!(result, Err(SettingsError::Parse(_))));
        assert_eq!(fallback, Settings::default());
    }
}
