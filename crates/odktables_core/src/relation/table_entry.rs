//! `DbTableEntry` relation: one registry row per table.

use super::{get_required_string, get_string, EntityRecord};
use crate::db::DbResult;
use rusqlite::Row;

/// Field names of the table registry relation.
pub struct DbTableEntry;

impl DbTableEntry {
    /// Primary key; holds the table id.
    pub const ID: &'static str = "_URI";
    pub const TABLE_KEY: &'static str = "TABLE_KEY";
    pub const DATA_ETAG: &'static str = "DATA_ETAG";
    pub const PROPERTIES_ETAG: &'static str = "PROPERTIES_ETAG";
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbTableEntryEntity {
    pub id: String,
    pub table_key: String,
    pub data_etag: Option<String>,
    pub properties_etag: Option<String>,
}

impl EntityRecord for DbTableEntryEntity {
    fn from_row(row: &Row<'_>) -> DbResult<Self> {
        Ok(Self {
            id: get_required_string(row, DbTableEntry::ID)?,
            table_key: get_required_string(row, DbTableEntry::TABLE_KEY)?,
            data_etag: get_string(row, DbTableEntry::DATA_ETAG)?,
            properties_etag: get_string(row, DbTableEntry::PROPERTIES_ETAG)?,
        })
    }
}
