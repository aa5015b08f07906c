//! Report generation
//!
//! Aggregate summaries over movement collections: per-category totals
//! with a grand balance, and the committee activity drill-down report.

pub mod activity;
pub mod summary;

pub use activity::{ActivityReport, ActivityTally};
pub use summary::{aggregate, SummaryTotals};
