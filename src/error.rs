//! Custom error types for SISGEFI
//!
//! This module defines the error hierarchy for the toolkit using thiserror
//! for ergonomic error definitions. The query engine itself is total and
//! never fails; errors only arise at the I/O and export boundaries.

use thiserror::Error;

/// The main error type for SISGEFI operations
#[derive(Error, Debug)]
pub enum SisgefiError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Snapshot parsing errors (bad dates, amounts, enum values)
    #[error("Parse error: {0}")]
    Parse(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Attempted to export an empty collection
    #[error("Nothing to export: no {entity} matched")]
    EmptyExport {
        /// Human-readable entity name ("users", "committees", "movements")
        entity: &'static str,
    },
}

impl SisgefiError {
    /// Create an empty-export error for an entity
    pub fn empty_export(entity: &'static str) -> Self {
        Self::EmptyExport { entity }
    }

    /// Check if this is the empty-export condition
    pub fn is_empty_export(&self) -> bool {
        matches!(self, Self::EmptyExport { .. })
    }
}

impl From<std::io::Error> for SisgefiError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SisgefiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Convenience type alias for Results with SisgefiError
pub type SisgefiResult<T> = Result<T, SisgefiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_export_message() {
        let err = SisgefiError::empty_export("users");
        assert_eq!(err.to_string(), "Nothing to export: no users matched");
        assert!(err.is_empty_export());
    }

    #[test]
    fn test_io_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: SisgefiError = io_err.into();
        assert!(matches!(err, SisgefiError::Io(_)));
        assert!(!err.is_empty_export());
    }
}
