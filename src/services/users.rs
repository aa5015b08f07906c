//! User directory service
//!
//! Owns a wholesale snapshot of the user list and instantiates the
//! generic query engine for the user shape: which fields free-text
//! search scans, which dropdown filters apply, what the sortable and
//! exportable fields are.

use crate::error::SisgefiResult;
use crate::export::{self, ColumnSpec};
use crate::models::User;
use crate::query::{self, FieldFilter, FieldSchema, FieldValue, FilterCriteria, QueryOutput, SortSpec};

use super::{FILTER_ALL, FILTER_NO_COMMITTEE};

/// Export filename prefix for user lists
pub const EXPORT_PREFIX: &str = "usuarios";

/// Snapshot-holding view over the registered users
pub struct UserDirectory {
    users: Vec<User>,
    schema: FieldSchema<User>,
}

impl UserDirectory {
    /// Create an empty directory
    pub fn new() -> Self {
        Self {
            users: Vec::new(),
            schema: Self::schema(),
        }
    }

    /// Create a directory from a fetched snapshot
    pub fn with_records(users: Vec<User>) -> Self {
        Self {
            users,
            schema: Self::schema(),
        }
    }

    /// Field schema for user records
    ///
    /// Search scans names, email and committee. "nombre" is the derived
    /// full name used for sorting; "rolId" is the numeric role filter.
    pub fn schema() -> FieldSchema<User> {
        FieldSchema::new(|u: &User| FieldValue::Integer(u.id.value()))
            .field("id", |u| FieldValue::Integer(u.id.value()))
            .searchable("nombres", |u| FieldValue::text(&u.first_names))
            .searchable("apellidos", |u| FieldValue::text(&u.last_names))
            .searchable("email", |u| FieldValue::text(&u.email))
            .searchable("comite", |u| FieldValue::opt_text(u.committee_name.as_deref()))
            .field("nombre", |u| FieldValue::Text(u.full_name()))
            .field("estado", |u| FieldValue::text(u.status.as_str()))
            .field("rol", |u| FieldValue::text(u.role_label()))
            .field("rolId", |u| FieldValue::Integer(u.role_id))
    }

    /// Export column layout for user lists
    pub fn columns() -> Vec<ColumnSpec> {
        vec![
            ColumnSpec::new("ID", "id", 10),
            ColumnSpec::new("Nombres", "nombres", 20),
            ColumnSpec::new("Apellidos", "apellidos", 20),
            ColumnSpec::new("Email", "email", 30),
            ColumnSpec::new("Estado", "estado", 15),
            ColumnSpec::new("Rol", "rol", 15),
            ColumnSpec::with_placeholder("Comité", "comite", 20, "Sin comité"),
        ]
    }

    /// Build criteria from dropdown-style selections
    ///
    /// "todos" selections restrict nothing; the committee filter accepts
    /// the "sin-comite" sentinel for users without a committee.
    pub fn criteria(search: &str, committee: &str, status: &str, role: &str) -> FilterCriteria {
        FilterCriteria::new()
            .search(search)
            .filter(
                "comite",
                FieldFilter::from_selection(committee, FILTER_ALL, Some(FILTER_NO_COMMITTEE)),
            )
            .filter("estado", FieldFilter::from_selection(status, FILTER_ALL, None))
            .filter("rolId", FieldFilter::from_selection(role, FILTER_ALL, None))
    }

    /// Replace the snapshot wholesale after a refetch
    pub fn replace_all(&mut self, users: Vec<User>) {
        self.users = users;
    }

    /// The current snapshot
    pub fn records(&self) -> &[User] {
        &self.users
    }

    /// Filter and order the snapshot
    pub fn query(&self, criteria: &FilterCriteria, sort: &SortSpec) -> QueryOutput<User> {
        query::query(&self.users, &self.schema, criteria, sort)
    }

    /// Distinct committee names, in order of first appearance
    pub fn committee_options(&self) -> Vec<String> {
        let mut options: Vec<String> = Vec::new();
        for user in &self.users {
            if let Some(name) = user.committee_name.as_deref() {
                if !name.is_empty() && !options.iter().any(|o| o == name) {
                    options.push(name.to_string());
                }
            }
        }
        options
    }

    /// Encode a (typically filtered) user list as spreadsheet bytes
    pub fn export(&self, visible: &[User]) -> SisgefiResult<Vec<u8>> {
        export::encode("users", visible, &self.schema, &Self::columns(), None)
    }
}

impl Default for UserDirectory {
    fn default() -> Self {
        Self::new()
    }
}
