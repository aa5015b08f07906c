//! Committee roster service
//!
//! Snapshot view over the committee list: search by name or season,
//! filter by status, sort, and export.

use crate::error::SisgefiResult;
use crate::export::{self, ColumnSpec};
use crate::models::Committee;
use crate::query::{self, FieldFilter, FieldSchema, FieldValue, FilterCriteria, QueryOutput, SortSpec};

use super::FILTER_ALL;

/// Export filename prefix for committee lists
pub const EXPORT_PREFIX: &str = "comites";

/// Snapshot-holding view over the committees
pub struct CommitteeRoster {
    committees: Vec<Committee>,
    schema: FieldSchema<Committee>,
}

impl CommitteeRoster {
    /// Create an empty roster
    pub fn new() -> Self {
        Self {
            committees: Vec::new(),
            schema: Self::schema(),
        }
    }

    /// Create a roster from a fetched snapshot
    pub fn with_records(committees: Vec<Committee>) -> Self {
        Self {
            committees,
            schema: Self::schema(),
        }
    }

    /// Field schema for committee records
    pub fn schema() -> FieldSchema<Committee> {
        FieldSchema::new(|c: &Committee| FieldValue::Integer(c.id.value()))
            .field("id", |c| FieldValue::Integer(c.id.value()))
            .searchable("nombre", |c| FieldValue::text(&c.name))
            .searchable("epoca", |c| FieldValue::text(&c.season))
            .field("estado", |c| FieldValue::text(c.status.as_str()))
    }

    /// Export column layout for committee lists
    pub fn columns() -> Vec<ColumnSpec> {
        vec![
            ColumnSpec::new("ID", "id", 10),
            ColumnSpec::new("Nombre", "nombre", 25),
            ColumnSpec::new("Época", "epoca", 20),
            ColumnSpec::new("Estado", "estado", 15),
        ]
    }

    /// Build criteria from dropdown-style selections
    pub fn criteria(search: &str, status: &str) -> FilterCriteria {
        FilterCriteria::new()
            .search(search)
            .filter("estado", FieldFilter::from_selection(status, FILTER_ALL, None))
    }

    /// Replace the snapshot wholesale after a refetch
    pub fn replace_all(&mut self, committees: Vec<Committee>) {
        self.committees = committees;
    }

    /// The current snapshot
    pub fn records(&self) -> &[Committee] {
        &self.committees
    }

    /// Filter and order the snapshot
    pub fn query(&self, criteria: &FilterCriteria, sort: &SortSpec) -> QueryOutput<Committee> {
        query::query(&self.committees, &self.schema, criteria, sort)
    }

    /// Encode a (typically filtered) committee list as spreadsheet bytes
    pub fn export(&self, visible: &[Committee]) -> SisgefiResult<Vec<u8>> {
        export::encode("committees", visible, &self.schema, &Self::columns(), None)
    }
}

impl Default for CommitteeRoster {
    fn default() -> Self {
        Self::new()
    }
}
