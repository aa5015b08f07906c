//! Configuration module for SISGEFI
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::SisgefiPaths;
pub use settings::Settings;
