//! Entity view services
//!
//! One service per entity shape, each instantiating the generic query
//! engine once: field schema, search fields, dropdown filters, export
//! columns. Each service exclusively owns its snapshot and replaces it
//! wholesale after a refetch; queries never mutate it.

pub mod committees;
pub mod movements;
pub mod users;

/// Dropdown sentinel meaning "no restriction"
pub const FILTER_ALL: &str = "todos";
/// Dropdown sentinel matching users without a committee
pub const FILTER_NO_COMMITTEE: &str = "sin-comite";

pub use committees::CommitteeRoster;
pub use movements::{MovementLog, MovementSummary};
pub use users::UserDirectory;
