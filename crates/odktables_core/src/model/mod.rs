//! Domain values exposed to the sync API layer.
//!
//! # Responsibility
//! - Define the typed shapes produced from persisted entities.
//! - Own strict parsing of the enum names stored as free-form strings.
//!
//! # Invariants
//! - Enum parsing never defaults; unknown names surface as `ConvertError`.
//! - Row values stay stringly-typed.

pub mod acl;
pub mod error;
pub mod field;
pub mod row;
pub mod table;
