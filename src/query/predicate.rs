//! Predicate builder
//!
//! Combines the free-text predicate and the active field predicates into a
//! single visibility check: a record is visible iff the search term matches
//! at least one search field AND every active field filter matches.
//! Malformed or unknown fields degrade to non-match; nothing here errors.

use super::criteria::{FieldFilter, FilterCriteria};
use super::schema::FieldSchema;

/// Check whether a record is visible under the given criteria
pub fn matches<T>(schema: &FieldSchema<T>, criteria: &FilterCriteria, record: &T) -> bool {
    matches_search(schema, &criteria.search_term, record)
        && criteria
            .active_filters()
            .all(|(field, selection)| matches_field(schema, field, selection, record))
}

/// Case-insensitive substring match over the schema's search fields
///
/// An empty term matches everything. Null fields render as empty text and
/// therefore never contain a non-empty term.
fn matches_search<T>(schema: &FieldSchema<T>, term: &str, record: &T) -> bool {
    if term.is_empty() {
        return true;
    }
    let term = term.to_lowercase();
    schema
        .search_fields()
        .iter()
        .any(|field| schema.resolve(field, record).as_text().to_lowercase().contains(&term))
}

fn matches_field<T>(
    schema: &FieldSchema<T>,
    field: &str,
    selection: &FieldFilter,
    record: &T,
) -> bool {
    let value = schema.resolve(field, record);
    match selection {
        FieldFilter::Any => true,
        FieldFilter::Missing => value.is_missing(),
        FieldFilter::Equals(expected) => !value.is_missing() && value.as_text() == *expected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::value::FieldValue;

    struct Member {
        id: i64,
        name: String,
        group: Option<String>,
    }

    fn schema() -> FieldSchema<Member> {
        FieldSchema::new(|m: &Member| FieldValue::Integer(m.id))
            .field("id", |m| FieldValue::Integer(m.id))
            .searchable("name", |m| FieldValue::text(&m.name))
            .searchable("group", |m| FieldValue::opt_text(m.group.as_deref()))
    }

    fn member(id: i64, name: &str, group: Option<&str>) -> Member {
        Member {
            id,
            name: name.to_string(),
            group: group.map(String::from),
        }
    }

    #[test]
    fn test_identity_matches_all() {
        let schema = schema();
        let criteria = FilterCriteria::new();
        assert!(matches(&schema, &criteria, &member(1, "Ana", None)));
    }

    #[test]
    fn test_search_case_insensitive_both_sides() {
        let schema = schema();
        let criteria = FilterCriteria::new().search("ana");
        assert!(matches(&schema, &criteria, &member(1, "ANA", None)));

        let criteria = FilterCriteria::new().search("ANA");
        assert!(matches(&schema, &criteria, &member(1, "ana maria", None)));
    }

    #[test]
    fn test_search_null_field_never_matches() {
        let schema = schema();
        let criteria = FilterCriteria::new().search("pastoral");
        assert!(!matches(&schema, &criteria, &member(1, "Ana", None)));
        assert!(matches(&schema, &criteria, &member(2, "Bob", Some("Pastoral"))));
    }

    #[test]
    fn test_equality_filter() {
        let schema = schema();
        let criteria = FilterCriteria::new().filter_eq("id", "2");
        assert!(matches(&schema, &criteria, &member(2, "Bob", None)));
        assert!(!matches(&schema, &criteria, &member(3, "Cara", None)));
    }

    #[test]
    fn test_missing_sentinel() {
        let schema = schema();
        let criteria = FilterCriteria::new().filter_missing("group");
        assert!(matches(&schema, &criteria, &member(1, "Ana", None)));
        assert!(!matches(&schema, &criteria, &member(2, "Bob", Some("A"))));
    }

    #[test]
    fn test_unknown_field_never_matches_equals() {
        let schema = schema();
        let criteria = FilterCriteria::new().filter_eq("nope", "x");
        assert!(!matches(&schema, &criteria, &member(1, "Ana", None)));
    }

    #[test]
    fn test_and_combination() {
        let schema = schema();
        let criteria = FilterCriteria::new()
            .search("a")
            .filter_eq("group", "Pastoral");
        assert!(matches(&schema, &criteria, &member(1, "Ana", Some("Pastoral"))));
        assert!(!matches(&schema, &criteria, &member(2, "Ana", Some("Otro"))));
    }
}
