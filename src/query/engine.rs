//! Query engine
//!
//! Pure filter-then-sort pipeline over an in-memory snapshot. The engine
//! holds no state between calls and never mutates its input; every call
//! recomputes the full view from scratch, which is deliberate: snapshots
//! are small (low thousands of records) and recomputation is cheaper than
//! incremental maintenance.

use super::comparator::{self, SortSpec};
use super::criteria::FilterCriteria;
use super::predicate;
use super::schema::FieldSchema;

/// Result of one query invocation
#[derive(Debug, Clone)]
pub struct QueryOutput<T> {
    /// Visible records, filtered then ordered
    pub records: Vec<T>,
    /// Number of records after filtering
    pub visible_count: usize,
    /// Number of records before filtering
    pub total_count: usize,
}

/// Filter and order a snapshot
///
/// Filtering runs strictly before sorting so only visible records are
/// compared. The sort is `sort_by` (stable), so records that compare equal
/// on the sort key keep their snapshot order.
pub fn query<T: Clone>(
    records: &[T],
    schema: &FieldSchema<T>,
    criteria: &FilterCriteria,
    sort: &SortSpec,
) -> QueryOutput<T> {
    let total_count = records.len();

    let mut visible: Vec<T> = records
        .iter()
        .filter(|record| predicate::matches(schema, criteria, record))
        .cloned()
        .collect();

    visible.sort_by(|a, b| comparator::compare(schema, sort, a, b));

    QueryOutput {
        visible_count: visible.len(),
        total_count,
        records: visible,
    }
}
