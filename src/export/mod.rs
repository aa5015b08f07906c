//! Export module for SISGEFI
//!
//! Spreadsheet-compatible CSV encoding of filtered record collections,
//! with per-column null placeholders, optional summary trailer rows and
//! the dated filename convention.

pub mod filename;
pub mod table;

pub use filename::{export_filename, export_filename_today};
pub use table::{encode, ColumnSpec, TrailerBlock};
