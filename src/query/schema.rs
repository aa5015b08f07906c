//! Field schemas: named extractors over a record type
//!
//! A schema is what makes the engine generic. Each entity shape (user,
//! committee, movement) registers its sortable/filterable fields once,
//! which fields free-text search scans, and the default sort key (the
//! record id). Derived fields, such as a full name concatenated from two
//! underlying fields, are ordinary extractors.

use super::value::FieldValue;

/// Extractor resolving a named field from a record
pub type FieldExtractor<T> = fn(&T) -> FieldValue;

/// Schema describing the queryable fields of a record type
pub struct FieldSchema<T> {
    fields: Vec<(&'static str, FieldExtractor<T>)>,
    search_fields: Vec<&'static str>,
    default_sort: FieldExtractor<T>,
}

impl<T> FieldSchema<T> {
    /// Create a schema with the given default sort extractor (record id)
    pub fn new(default_sort: FieldExtractor<T>) -> Self {
        Self {
            fields: Vec::new(),
            search_fields: Vec::new(),
            default_sort,
        }
    }

    /// Register a named field
    pub fn field(mut self, name: &'static str, extractor: FieldExtractor<T>) -> Self {
        self.fields.push((name, extractor));
        self
    }

    /// Register a named field and include it in free-text search
    pub fn searchable(mut self, name: &'static str, extractor: FieldExtractor<T>) -> Self {
        self.search_fields.push(name);
        self.field(name, extractor)
    }

    /// Look up a field extractor by name
    pub fn extractor(&self, name: &str) -> Option<FieldExtractor<T>> {
        self.fields
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, extractor)| *extractor)
    }

    /// Resolve a named field on a record; unknown fields resolve to Null
    pub fn resolve(&self, name: &str, record: &T) -> FieldValue {
        match self.extractor(name) {
            Some(extractor) => extractor(record),
            None => FieldValue::Null,
        }
    }

    /// Resolve the sort key for a field name, falling back to the default
    /// sort extractor (record id) when the field is not recognized
    pub fn sort_key(&self, name: &str, record: &T) -> FieldValue {
        match self.extractor(name) {
            Some(extractor) => extractor(record),
            None => (self.default_sort)(record),
        }
    }

    /// Names of the fields included in free-text search
    pub fn search_fields(&self) -> &[&'static str] {
        &self.search_fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Pair {
        id: i64,
        label: Option<String>,
    }

    fn test_schema() -> FieldSchema<Pair> {
        FieldSchema::new(|p: &Pair| FieldValue::Integer(p.id))
            .field("id", |p| FieldValue::Integer(p.id))
            .searchable("label", |p| FieldValue::opt_text(p.label.as_deref()))
    }

    #[test]
    fn test_resolve_known_field() {
        let schema = test_schema();
        let record = Pair {
            id: 9,
            label: Some("hello".into()),
        };
        assert_eq!(schema.resolve("label", &record).as_text(), "hello");
        assert_eq!(schema.resolve("id", &record), FieldValue::Integer(9));
    }

    #[test]
    fn test_resolve_unknown_field_is_null() {
        let schema = test_schema();
        let record = Pair { id: 9, label: None };
        assert_eq!(schema.resolve("missing", &record), FieldValue::Null);
    }

    #[test]
    fn test_sort_key_falls_back_to_default() {
        let schema = test_schema();
        let record = Pair { id: 42, label: None };
        assert_eq!(schema.sort_key("missing", &record), FieldValue::Integer(42));
    }

    #[test]
    fn test_search_fields() {
        let schema = test_schema();
        assert_eq!(schema.search_fields(), &["label"]);
    }
}
