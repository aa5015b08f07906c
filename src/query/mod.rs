//! Generic in-memory list query engine
//!
//! Filter + sort over a snapshot of records, parameterized by a field
//! schema so that each entity shape (users, committees, movements) is
//! described once instead of duplicating filter/sort logic per view.
//!
//! The pipeline is pure and total: it never mutates the input collection,
//! holds no state between calls, and never fails. Degenerate inputs
//! (unknown fields, null values, empty collections) resolve to documented
//! defaults rather than errors.

pub mod comparator;
pub mod criteria;
pub mod engine;
pub mod predicate;
pub mod schema;
pub mod value;

pub use comparator::{SortDirection, SortSpec};
pub use criteria::{FieldFilter, FilterCriteria};
pub use engine::{query, QueryOutput};
pub use schema::{FieldExtractor, FieldSchema};
pub use value::FieldValue;
