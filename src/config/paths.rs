//! Path management for SISGEFI
//!
//! Provides XDG-compliant path resolution for configuration and export
//! output.
//!
//! ## Path Resolution Order
//!
//! 1. `SISGEFI_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/sisgefi` or `~/.config/sisgefi`
//! 3. Windows: `%APPDATA%\sisgefi`

use std::path::PathBuf;

use crate::error::SisgefiError;

/// Manages all paths used by SISGEFI
#[derive(Debug, Clone)]
pub struct SisgefiPaths {
    /// Base directory for all SISGEFI data
    base_dir: PathBuf,
}

impl SisgefiPaths {
    /// Create a new SisgefiPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, SisgefiError> {
        let base_dir = if let Ok(custom) = std::env::var("SISGEFI_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create SisgefiPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/sisgefi/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the directory export files are written to by default
    pub fn exports_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), SisgefiError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| SisgefiError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.exports_dir())
            .map_err(|e| SisgefiError::Io(format!("Failed to create exports directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, SisgefiError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });

    Ok(config_base.join("sisgefi"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, SisgefiError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| SisgefiError::Config("APPDATA environment variable not set".to_string()))?;

    Ok(PathBuf::from(appdata).join("sisgefi"))
}
