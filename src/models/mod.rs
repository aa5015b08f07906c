//! Core data models for SISGEFI
//!
//! This module contains the data structures that mirror the dashboard
//! backend's wire shapes: users, committees and financial movements,
//! plus the Money type used for all amounts.

pub mod committee;
pub mod ids;
pub mod money;
pub mod movement;
pub mod status;
pub mod user;

pub use committee::Committee;
pub use ids::{CommitteeId, MovementId, UserId};
pub use money::{Money, MoneyParseError};
pub use movement::{Movement, MovementKind};
pub use status::Status;
pub use user::{User, ROLE_ADMIN};
