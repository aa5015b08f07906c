//! SISGEFI - Committee finance snapshot toolkit
//!
//! This library provides the query, reporting and export engine behind the
//! SISGEFI committee finance tooling. It takes wholesale JSON snapshots of
//! users, committees and financial movements and offers the operations the
//! dashboard needs: free-text search, dropdown-style filtering, sorting on
//! real or derived fields, income/expense summaries and spreadsheet export.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Wire-shaped data models (users, committees, movements)
//! - `query`: Generic predicate, comparator and query engine
//! - `reports`: Summary totals and activity statistics
//! - `export`: Tabular export encoding and filename convention
//! - `services`: Per-entity views that instantiate the query engine
//! - `display`: Terminal table and currency formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use sisgefi::query::SortSpec;
//! use sisgefi::services::UserDirectory;
//!
//! let directory = UserDirectory::with_records(users);
//! let criteria = UserDirectory::criteria("ana", "todos", "activo", "todos");
//! let out = directory.query(&criteria, &SortSpec::asc("nombre"));
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod query;
pub mod reports;
pub mod services;

pub use error::SisgefiError;
