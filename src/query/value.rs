//! Field values resolved from records
//!
//! Every field a schema exposes resolves to one of these variants. The
//! engine never fails on a missing or oddly-typed field: nulls become
//! empty text for comparison, and amounts coerce defensively to zero
//! when unparseable.

use std::cmp::Ordering;

use crate::models::Money;

/// A scalar value resolved from a record field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Text field (names, emails, labels)
    Text(String),
    /// Integer field (ids, role ids)
    Integer(i64),
    /// Monetary amount
    Money(Money),
    /// Missing/null field
    Null,
}

impl FieldValue {
    /// Build a text value from anything string-like
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    /// Build a value from an optional string, mapping None to Null
    pub fn opt_text(s: Option<&str>) -> Self {
        match s {
            Some(s) => Self::Text(s.to_string()),
            None => Self::Null,
        }
    }

    /// Whether this value counts as missing: Null, or empty text
    ///
    /// Empty text counts because the backend sometimes sends "" where it
    /// means "no value", and the original dashboard treated both the same.
    pub fn is_missing(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Text(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Canonical text rendering; Null renders as the empty string
    pub fn as_text(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Integer(n) => n.to_string(),
            Self::Money(m) => m.to_string(),
            Self::Null => String::new(),
        }
    }

    /// Coerce to a monetary amount
    ///
    /// Money passes through, integers are taken as whole currency units,
    /// text is parsed, and anything else degrades to zero.
    pub fn as_money(&self) -> Money {
        match self {
            Self::Money(m) => *m,
            Self::Integer(n) => Money::from_units(*n),
            Self::Text(s) => Money::parse(s).unwrap_or_else(|_| Money::zero()),
            Self::Null => Money::zero(),
        }
    }

    /// Total ordering over field values
    ///
    /// Numeric values compare numerically; any other combination compares
    /// on the canonical text, so nulls sort first in ascending order.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a.cmp(b),
            (Self::Money(a), Self::Money(b)) => a.cmp(b),
            (Self::Integer(a), Self::Money(b)) => Money::from_units(*a).cmp(b),
            (Self::Money(a), Self::Integer(b)) => a.cmp(&Money::from_units(*b)),
            _ => self.as_text().cmp(&other.as_text()),
        }
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<Money> for FieldValue {
    fn from(m: Money) -> Self {
        Self::Money(m)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_text() {
        assert_eq!(FieldValue::text("Ana").as_text(), "Ana");
        assert_eq!(FieldValue::Integer(7).as_text(), "7");
        assert_eq!(FieldValue::Money(Money::from_cents(1050)).as_text(), "10.50");
        assert_eq!(FieldValue::Null.as_text(), "");
    }

    #[test]
    fn test_missing() {
        assert!(FieldValue::Null.is_missing());
        assert!(FieldValue::text("").is_missing());
        assert!(!FieldValue::text("x").is_missing());
        assert!(!FieldValue::Integer(0).is_missing());
    }

    #[test]
    fn test_money_coercion() {
        assert_eq!(FieldValue::Money(Money::from_cents(500)).as_money().cents(), 500);
        assert_eq!(FieldValue::Integer(3).as_money().cents(), 300);
        assert_eq!(FieldValue::text("12.50").as_money().cents(), 1250);
        // Non-coercible values degrade to zero, never error
        assert_eq!(FieldValue::text("n/a").as_money().cents(), 0);
        assert_eq!(FieldValue::Null.as_money().cents(), 0);
        // Including text with multibyte characters after the decimal point
        assert_eq!(FieldValue::text("1.\u{FF15}0").as_money().cents(), 0);
    }

    #[test]
    fn test_compare_numeric() {
        let a = FieldValue::Integer(2);
        let b = FieldValue::Integer(10);
        assert_eq!(a.compare(&b), Ordering::Less);

        let m = FieldValue::Money(Money::from_cents(250));
        assert_eq!(a.compare(&m), Ordering::Less);
    }

    #[test]
    fn test_compare_text_nulls_first() {
        let null = FieldValue::Null;
        let text = FieldValue::text("Ana");
        assert_eq!(null.compare(&text), Ordering::Less);
        assert_eq!(text.compare(&null), Ordering::Greater);
        assert_eq!(null.compare(&FieldValue::Null), Ordering::Equal);
    }
}
