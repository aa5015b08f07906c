//! User settings for SISGEFI
//!
//! Display preferences persisted as pretty-printed JSON in the config
//! directory.

use serde::{Deserialize, Serialize};

use super::paths::SisgefiPaths;
use crate::error::SisgefiError;

fn default_schema_version() -> u32 {
    1
}

fn default_currency_symbol() -> String {
    "S/".to_string()
}

/// User settings for SISGEFI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used for display formatting
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &SisgefiPaths) -> Result<Self, SisgefiError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| SisgefiError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| SisgefiError::Config(format!("Failed to parse settings file: {}", e)))?;

            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SisgefiPaths) -> Result<(), SisgefiError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| SisgefiError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| SisgefiError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
