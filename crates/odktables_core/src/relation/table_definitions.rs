//! `DbTableDefinitions` relation: structural definition of each table.
//!
//! The table type is kept as the stored string; parsing it is the
//! converter's job so an unknown name fails at conversion, not at load.

use super::{get_required_string, get_string, EntityRecord};
use crate::db::DbResult;
use rusqlite::Row;

pub struct DbTableDefinitions;

impl DbTableDefinitions {
    pub const TABLE_ID: &'static str = "TABLE_ID";
    pub const DB_TABLE_NAME: &'static str = "DB_TABLE_NAME";
    pub const TYPE: &'static str = "TYPE";
    pub const TABLE_ID_ACCESS_CONTROLS: &'static str = "TABLE_ID_ACCESS_CONTROLS";
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbTableDefinitionsEntity {
    pub table_id: String,
    pub db_table_name: String,
    pub table_type: String,
    pub table_id_access_controls: Option<String>,
}

impl EntityRecord for DbTableDefinitionsEntity {
    fn from_row(row: &Row<'_>) -> DbResult<Self> {
        Ok(Self {
            table_id: get_required_string(row, DbTableDefinitions::TABLE_ID)?,
            db_table_name: get_required_string(row, DbTableDefinitions::DB_TABLE_NAME)?,
            table_type: get_required_string(row, DbTableDefinitions::TYPE)?,
            table_id_access_controls: get_string(
                row,
                DbTableDefinitions::TABLE_ID_ACCESS_CONTROLS,
            )?,
        })
    }
}
