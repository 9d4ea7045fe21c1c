//! Storage field descriptors.
//!
//! Every user-defined column is stored as a nullable string field no matter
//! which logical type the column declares. Richer typing would need a
//! migration story for columns whose type changes, which does not exist yet.

use serde::{Deserialize, Serialize};

/// Physical type of a storage field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataType {
    String,
    Boolean,
    /// Unix epoch milliseconds.
    DateTime,
}

/// Named, typed column of a storage relation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DataField {
    pub name: String,
    pub data_type: DataType,
    pub nullable: bool,
}

impl DataField {
    pub fn new(name: impl Into<String>, data_type: DataType, nullable: bool) -> Self {
        Self {
            name: name.into(),
            data_type,
            nullable,
        }
    }

    /// Nullable string field, the storage shape of every user column.
    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, DataType::String, true)
    }
}
