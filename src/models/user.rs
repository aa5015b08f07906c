//! User model
//!
//! Mirrors the backend's user records: names, email, activation status,
//! role (1 = administrator, 2 = member) and optional committee membership.
//! Wire field names are preserved so snapshots deserialize unchanged.

use serde::{Deserialize, Serialize};

use super::ids::UserId;
use super::status::Status;

/// Role id the backend assigns to administrators; everyone else is a
/// regular member
pub const ROLE_ADMIN: i64 = 1;

/// A registered user of the dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier
    pub id: UserId,

    /// Given names
    #[serde(rename = "nombres")]
    pub first_names: String,

    /// Family names
    #[serde(rename = "apellidos")]
    pub last_names: String,

    /// Email address
    pub email: String,

    /// Activation status
    #[serde(rename = "estado")]
    pub status: Status,

    /// Role label as sent by the backend ("Administrador"/"Usuario")
    #[serde(rename = "rol", default)]
    pub role_name: String,

    /// Numeric role id (1 = administrator, 2 = member)
    #[serde(rename = "rolId")]
    pub role_id: i64,

    /// Name of the committee this user belongs to, if any
    #[serde(rename = "comiteNombre")]
    pub committee_name: Option<String>,
}

impl User {
    /// Full display name, first names then last names separated by a space
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_names, self.last_names)
    }

    /// Whether this user has the administrator role
    pub fn is_admin(&self) -> bool {
        self.role_id == ROLE_ADMIN
    }

    /// Role label, falling back to the canonical label when the backend
    /// omitted the "rol" field
    pub fn role_label(&self) -> &str {
        if !self.role_name.is_empty() {
            &self.role_name
        } else if self.is_admin() {
            "Administrador"
        } else {
            "Usuario"
        }
    }
}
