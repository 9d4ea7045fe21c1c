//! Table metadata domain values.
//!
//! # Responsibility
//! - Describe tables, their columns and their key-value-store properties the
//!   way the sync API exposes them.
//!
//! # Invariants
//! - Values are read-only projections; nothing here talks to storage.
//! - `TableDefinition::columns` is `None` until a caller attaches columns.

use super::error::{ConvertError, ConvertResult};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Kind of a synchronized table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TableType {
    /// Regular user data table.
    Data,
    /// Table holding access-control rows for another table.
    Security,
    /// Table holding SMS shortcut definitions.
    Shortcut,
}

impl TableType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Data => "DATA",
            Self::Security => "SECURITY",
            Self::Shortcut => "SHORTCUT",
        }
    }
}

impl FromStr for TableType {
    type Err = ConvertError;

    fn from_str(value: &str) -> ConvertResult<Self> {
        match value {
            "DATA" => Ok(Self::Data),
            "SECURITY" => Ok(Self::Security),
            "SHORTCUT" => Ok(Self::Shortcut),
            other => Err(ConvertError::unknown_enum("TableType", other)),
        }
    }
}

impl Display for TableType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Registry entry of a table: identity plus current version tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableEntry {
    pub table_id: String,
    pub table_key: String,
    #[serde(rename = "dataETag")]
    pub data_etag: Option<String>,
    #[serde(rename = "propertiesETag")]
    pub properties_etag: Option<String>,
}

impl TableEntry {
    pub fn new(
        table_id: impl Into<String>,
        table_key: impl Into<String>,
        data_etag: Option<String>,
        properties_etag: Option<String>,
    ) -> Self {
        Self {
            table_id: table_id.into(),
            table_key: table_key.into(),
            data_etag,
            properties_etag,
        }
    }
}

/// User-defined column of a table.
///
/// `list_child_element_keys` and `joins` are kept in their serialized form;
/// this layer never interprets them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub table_id: String,
    pub element_key: String,
    pub element_name: Option<String>,
    pub element_type: Option<String>,
    pub list_child_element_keys: Option<String>,
    pub is_persisted: bool,
    pub joins: Option<String>,
}

/// One typed entry of the per-table key-value store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyValueStoreEntry {
    pub table_id: String,
    pub partition: String,
    pub aspect: String,
    pub key: String,
    /// Type tag describing how `value` should be read, e.g. `"integer"`.
    #[serde(rename = "type")]
    pub entry_type: Option<String>,
    pub value: Option<String>,
}

/// Versioned bundle of a table's key-value-store entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableProperties {
    #[serde(rename = "propertiesETag")]
    pub properties_etag: Option<String>,
    pub table_id: String,
    pub kvs_entries: Vec<KeyValueStoreEntry>,
}

impl TableProperties {
    pub fn new(
        properties_etag: Option<String>,
        table_id: impl Into<String>,
        kvs_entries: Vec<KeyValueStoreEntry>,
    ) -> Self {
        Self {
            properties_etag,
            table_id: table_id.into(),
            kvs_entries,
        }
    }
}

/// Structural definition of a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableDefinition {
    pub table_id: String,
    /// Populated by callers that also loaded the column definitions.
    pub columns: Option<Vec<Column>>,
    pub table_key: String,
    pub db_table_name: String,
    #[serde(rename = "type")]
    pub table_type: TableType,
    pub table_id_access_controls: Option<String>,
}

impl TableDefinition {
    /// Attaches the column list the definition was built without.
    pub fn with_columns(mut self, columns: Vec<Column>) -> Self {
        self.columns = Some(columns);
        self
    }
}
