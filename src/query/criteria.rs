//! Filter criteria: the ephemeral UI-side filter state
//!
//! A criteria value combines a free-text search term with per-field
//! selections. The empty term plus all-"any" selections is the identity
//! filter and matches every record.

use std::collections::BTreeMap;

/// Selection for a single filterable field
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldFilter {
    /// No restriction ("todos")
    #[default]
    Any,
    /// The field must equal this value exactly
    Equals(String),
    /// The field must be missing/null ("sin-comite")
    Missing,
}

impl FieldFilter {
    /// Whether this selection restricts anything
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Any)
    }

    /// Parse a dropdown-style selection string
    ///
    /// `any_token` is the sentinel meaning "no restriction" ("todos") and
    /// `missing_token`, when given, is the sentinel matching null fields
    /// ("sin-comite"). Anything else becomes an exact-equality filter.
    pub fn from_selection(value: &str, any_token: &str, missing_token: Option<&str>) -> Self {
        if value == any_token {
            Self::Any
        } else if missing_token == Some(value) {
            Self::Missing
        } else {
            Self::Equals(value.to_string())
        }
    }
}

/// Combined filter state for one list view
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    /// Case-insensitive free-text term, matched against the schema's
    /// search fields
    pub search_term: String,
    /// Per-field selections, keyed by schema field name
    pub field_filters: BTreeMap<&'static str, FieldFilter>,
}

impl FilterCriteria {
    /// Create the identity criteria (matches everything)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search term
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    /// Require a field to equal a value
    pub fn filter_eq(mut self, field: &'static str, value: impl Into<String>) -> Self {
        self.field_filters
            .insert(field, FieldFilter::Equals(value.into()));
        self
    }

    /// Require a field to be missing/null
    pub fn filter_missing(mut self, field: &'static str) -> Self {
        self.field_filters.insert(field, FieldFilter::Missing);
        self
    }

    /// Set a field selection directly
    pub fn filter(mut self, field: &'static str, selection: FieldFilter) -> Self {
        self.field_filters.insert(field, selection);
        self
    }

    /// Whether this is the identity filter
    pub fn is_identity(&self) -> bool {
        self.search_term.is_empty() && self.field_filters.values().all(|f| !f.is_active())
    }

    /// Active (restricting) field selections
    pub fn active_filters(&self) -> impl Iterator<Item = (&'static str, &FieldFilter)> {
        self.field_filters
            .iter()
            .filter(|(_, selection)| selection.is_active())
            .map(|(field, selection)| (*field, selection))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        assert!(FilterCriteria::new().is_identity());
        assert!(FilterCriteria::new()
            .filter("estado", FieldFilter::Any)
            .is_identity());
        assert!(!FilterCriteria::new().search("ana").is_identity());
        assert!(!FilterCriteria::new()
            .filter_eq("estado", "activo")
            .is_identity());
    }

    #[test]
    fn test_from_selection() {
        assert_eq!(
            FieldFilter::from_selection("todos", "todos", Some("sin-comite")),
            FieldFilter::Any
        );
        assert_eq!(
            FieldFilter::from_selection("sin-comite", "todos", Some("sin-comite")),
            FieldFilter::Missing
        );
        assert_eq!(
            FieldFilter::from_selection("Pastoral", "todos", Some("sin-comite")),
            FieldFilter::Equals("Pastoral".to_string())
        );
    }

    #[test]
    fn test_active_filters_skip_any() {
        let criteria = FilterCriteria::new()
            .filter("estado", FieldFilter::Any)
            .filter_eq("rolId", "2");
        let active: Vec<_> = criteria.active_filters().collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].0, "rolId");
    }
}
