//! Movement model
//!
//! Represents a single income or expense movement ("movimiento") recorded
//! against a committee: date, kind, activity description, optional receipt
//! code and voucher image, and the amount.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::MovementId;
use super::money::{self, Money};

/// Kind of movement, carried on the wire as "Ingreso"/"Egreso"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MovementKind {
    /// Income ("Ingreso")
    #[serde(rename = "Ingreso")]
    Income,
    /// Expense ("Egreso")
    #[serde(rename = "Egreso")]
    Expense,
}

impl MovementKind {
    /// The wire string for this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "Ingreso",
            Self::Expense => "Egreso",
        }
    }
}

impl fmt::Display for MovementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MovementKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ingreso" | "income" => Ok(Self::Income),
            "egreso" | "expense" => Ok(Self::Expense),
            other => Err(format!("unknown movement kind: {}", other)),
        }
    }
}

/// A financial movement (income or expense transaction)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movement {
    /// Unique identifier
    pub id: MovementId,

    /// Movement date
    #[serde(rename = "fecha")]
    pub date: NaiveDate,

    /// Income or expense
    #[serde(rename = "tipo_de_cuenta")]
    pub kind: MovementKind,

    /// Activity description, e.g. "Venta de polladas"
    #[serde(rename = "actividad")]
    pub activity: String,

    /// Optional receipt code
    #[serde(rename = "codigo")]
    pub code: Option<String>,

    /// Amount in currency units on the wire, cents internally
    #[serde(rename = "cantidad", with = "money::serde_units")]
    pub amount: Money,

    /// Full name of the user who recorded the movement, when the backend
    /// includes it (committee-level report endpoints do)
    #[serde(rename = "usuario", default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,

    /// Voucher image URL, if one was uploaded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voucher: Option<String>,
}

impl Movement {
    /// Signed amount: income positive, expense negative
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            MovementKind::Income => self.amount,
            MovementKind::Expense => -self.amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_wire_shape() {
        let json = r#"{
            "id": 12,
            "fecha": "2024-06-15",
            "tipo_de_cuenta": "Ingreso",
            "actividad": "Venta de polladas",
            "codigo": "R-0012",
            "cantidad": 150.5,
            "voucher": "https://example.com/v/12.jpg"
        }"#;

        let movement: Movement = serde_json::from_str(json).unwrap();
        assert_eq!(movement.kind, MovementKind::Income);
        assert_eq!(movement.amount.cents(), 15050);
        assert_eq!(movement.code.as_deref(), Some("R-0012"));
        assert_eq!(movement.date, NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
        assert!(movement.user_name.is_none());
    }

    #[test]
    fn test_null_code() {
        let json = r#"{
            "id": 13,
            "fecha": "2024-06-16",
            "tipo_de_cuenta": "Egreso",
            "actividad": "Compra de insumos",
            "codigo": null,
            "cantidad": 40
        }"#;

        let movement: Movement = serde_json::from_str(json).unwrap();
        assert!(movement.code.is_none());
        assert_eq!(movement.signed_amount().cents(), -4000);
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("Ingreso".parse::<MovementKind>().unwrap(), MovementKind::Income);
        assert_eq!("egreso".parse::<MovementKind>().unwrap(), MovementKind::Expense);
        assert!("transferencia".parse::<MovementKind>().is_err());
    }
}
