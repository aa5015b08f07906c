//! Comparator builder
//!
//! Turns a sort field name and direction into a two-record comparison via
//! the schema's extractors. Unrecognized fields silently fall back to the
//! schema's default key (the record id); "desc" inverts the result.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::schema::FieldSchema;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Ascending ("asc")
    #[default]
    Asc,
    /// Descending ("desc")
    Desc,
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asc => f.write_str("asc"),
            Self::Desc => f.write_str("desc"),
        }
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Asc),
            "desc" | "descending" => Ok(Self::Desc),
            other => Err(format!("unknown sort direction: {}", other)),
        }
    }
}

/// Field name plus direction; ephemeral per-view sort state
#[derive(Debug, Clone, Default)]
pub struct SortSpec {
    /// Schema field name to sort by; unknown names fall back to record id
    pub field: String,
    /// Sort direction
    pub direction: SortDirection,
}

impl SortSpec {
    /// Ascending sort on a field
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Asc,
        }
    }

    /// Descending sort on a field
    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Desc,
        }
    }
}

/// Compare two records under a sort spec
pub fn compare<T>(schema: &FieldSchema<T>, spec: &SortSpec, a: &T, b: &T) -> Ordering {
    let ordering = schema
        .sort_key(&spec.field, a)
        .compare(&schema.sort_key(&spec.field, b));
    match spec.direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::value::FieldValue;

    struct Person {
        id: i64,
        first: &'static str,
        last: &'static str,
    }

    fn schema() -> FieldSchema<Person> {
        FieldSchema::new(|p: &Person| FieldValue::Integer(p.id))
            .field("id", |p| FieldValue::Integer(p.id))
            // Derived field: full name from two underlying fields
            .field("nombre", |p| {
                FieldValue::Text(format!("{} {}", p.first, p.last))
            })
    }

    #[test]
    fn test_derived_field_sort() {
        let schema = schema();
        let ana = Person { id: 2, first: "Ana", last: "Z" };
        let bob = Person { id: 1, first: "Bob", last: "A" };

        let spec = SortSpec::asc("nombre");
        assert_eq!(compare(&schema, &spec, &ana, &bob), Ordering::Less);

        let spec = SortSpec::desc("nombre");
        assert_eq!(compare(&schema, &spec, &ana, &bob), Ordering::Greater);
    }

    #[test]
    fn test_unknown_field_falls_back_to_id() {
        let schema = schema();
        let a = Person { id: 1, first: "Z", last: "Z" };
        let b = Person { id: 2, first: "A", last: "A" };

        let spec = SortSpec::asc("no-such-field");
        assert_eq!(compare(&schema, &spec, &a, &b), Ordering::Less);
    }

    #[test]
    fn test_direction_parse() {
        assert_eq!("asc".parse::<SortDirection>().unwrap(), SortDirection::Asc);
        assert_eq!("DESC".parse::<SortDirection>().unwrap(), SortDirection::Desc);
        assert!("sideways".parse::<SortDirection>().is_err());
    }
}
