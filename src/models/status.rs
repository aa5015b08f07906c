//! Shared activation status for users and committees
//!
//! The backend carries this as the Spanish wire strings "activo"/"inactivo".

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Activation status of a user or committee
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Status {
    /// Active record ("activo")
    #[default]
    #[serde(rename = "activo")]
    Active,
    /// Inactive record ("inactivo")
    #[serde(rename = "inactivo")]
    Inactive,
}

impl Status {
    /// The wire string for this status
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "activo",
            Self::Inactive => "inactivo",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "activo" | "active" => Ok(Self::Active),
            "inactivo" | "inactive" => Ok(Self::Inactive),
            other => Err(format!("unknown status: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_strings() {
        assert_eq!(serde_json::to_string(&Status::Active).unwrap(), "\"activo\"");
        let s: Status = serde_json::from_str("\"inactivo\"").unwrap();
        assert_eq!(s, Status::Inactive);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("activo".parse::<Status>().unwrap(), Status::Active);
        assert_eq!("Inactive".parse::<Status>().unwrap(), Status::Inactive);
        assert!("pending".parse::<Status>().is_err());
    }
}
