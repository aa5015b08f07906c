//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the entity view services. Snapshots are
//! JSON arrays exported from the dashboard backend.

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{SisgefiError, SisgefiResult};
use crate::query::{SortDirection, SortSpec};

pub mod committees;
pub mod movements;
pub mod users;

pub use committees::{handle_committee_command, CommitteeCommands};
pub use movements::{handle_movement_command, MovementCommands};
pub use users::{handle_user_command, UserCommands};

/// Load a snapshot file: a JSON array of backend records
pub fn load_snapshot<T: DeserializeOwned>(path: &Path) -> SisgefiResult<Vec<T>> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| SisgefiError::Io(format!("Failed to read {}: {}", path.display(), e)))?;

    serde_json::from_str(&contents)
        .map_err(|e| SisgefiError::Json(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Parse the --sort and --direction flags into a sort spec
pub fn parse_sort(field: &str, direction: &str) -> SisgefiResult<SortSpec> {
    let direction: SortDirection = direction.parse().map_err(SisgefiError::Parse)?;
    Ok(SortSpec {
        field: field.to_string(),
        direction,
    })
}

/// Write export bytes, creating parent directories as needed
pub fn write_export(path: &Path, bytes: &[u8]) -> SisgefiResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .map_err(|e| SisgefiError::Io(format!("Failed to create {}: {}", parent.display(), e)))?;
        }
    }

    std::fs::write(path, bytes)
        .map_err(|e| SisgefiError::Io(format!("Failed to write {}: {}", path.display(), e)))
}
