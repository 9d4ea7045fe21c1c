//! `DbKeyValueStore` relation: typed per-table properties.

use super::{get_required_string, get_string, EntityRecord};
use crate::db::DbResult;
use rusqlite::Row;

pub struct DbKeyValueStore;

impl DbKeyValueStore {
    pub const TABLE_ID: &'static str = "TABLE_ID";
    pub const PARTITION: &'static str = "PARTITION";
    pub const ASPECT: &'static str = "ASPECT";
    pub const KEY: &'static str = "KEY";
    pub const TYPE: &'static str = "TYPE";
    pub const VALUE: &'static str = "VALUE";
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbKeyValueStoreEntity {
    pub table_id: String,
    pub partition: String,
    pub aspect: String,
    pub key: String,
    pub entry_type: Option<String>,
    pub value: Option<String>,
}

impl EntityRecord for DbKeyValueStoreEntity {
    fn from_row(row: &Row<'_>) -> DbResult<Self> {
        Ok(Self {
            table_id: get_required_string(row, DbKeyValueStore::TABLE_ID)?,
            partition: get_required_string(row, DbKeyValueStore::PARTITION)?,
            aspect: get_required_string(row, DbKeyValueStore::ASPECT)?,
            key: get_required_string(row, DbKeyValueStore::KEY)?,
            entry_type: get_string(row, DbKeyValueStore::TYPE)?,
            value: get_string(row, DbKeyValueStore::VALUE)?,
        })
    }
}
