//! Strongly-typed ID wrappers for all entity types
//!
//! The backend assigns numeric ids; newtype wrappers prevent accidentally
//! mixing up ids from different entity types at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Macro to generate ID newtype wrappers over the backend's numeric ids
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wrap a raw backend id
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            /// Get the underlying numeric id
            pub const fn value(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.parse()?))
            }
        }
    };
}

define_id!(UserId);
define_id!(CommitteeId);
define_id!(MovementId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_parse() {
        let id = UserId::new(42);
        assert_eq!(id.to_string(), "42");
        assert_eq!("42".parse::<UserId>().unwrap(), id);
        assert_eq!(id.value(), 42);
    }

    #[test]
    fn test_serde_transparent() {
        let id = MovementId::new(7);
        assert_eq!(serde_json::to_string(&id).unwrap(), "7");
        let back: MovementId = serde_json::from_str("7").unwrap();
        assert_eq!(back, id);
    }
}
