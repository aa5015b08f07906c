//! Committee model
//!
//! A committee groups users and their income/expense movements for one
//! season ("época"). Wire field names are preserved.

use serde::{Deserialize, Serialize};

use super::ids::CommitteeId;
use super::status::Status;

/// A committee of the association
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Committee {
    /// Unique identifier
    pub id: CommitteeId,

    /// Committee name
    #[serde(rename = "nombre")]
    pub name: String,

    /// Season or period label, e.g. "2024-II"
    #[serde(rename = "epoca")]
    pub season: String,

    /// Activation status
    #[serde(rename = "estado")]
    pub status: Status,
}
