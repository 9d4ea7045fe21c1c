//! `DbColumnDefinitions` relation: one row per user-defined column.

use super::{get_boolean, get_required_string, get_string, EntityRecord};
use crate::db::DbResult;
use rusqlite::Row;

/// Field names of the column definition relation.
pub struct DbColumnDefinitions;

impl DbColumnDefinitions {
    /// Column id; the storage identifier of the column's cells derives from it.
    pub const ID: &'static str = "_URI";
    pub const TABLE_ID: &'static str = "TABLE_ID";
    pub const ELEMENT_KEY: &'static str = "ELEMENT_KEY";
    pub const ELEMENT_NAME: &'static str = "ELEMENT_NAME";
    pub const ELEMENT_TYPE: &'static str = "ELEMENT_TYPE";
    pub const LIST_CHILD_ELEMENT_KEYS: &'static str = "LIST_CHILD_ELEMENT_KEYS";
    pub const IS_PERSISTED: &'static str = "IS_PERSISTED";
    pub const JOINS: &'static str = "JOINS";
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbColumnDefinitionsEntity {
    pub id: String,
    pub table_id: String,
    pub element_key: String,
    pub element_name: Option<String>,
    pub element_type: Option<String>,
    pub list_child_element_keys: Option<String>,
    pub is_persisted: Option<bool>,
    pub joins: Option<String>,
}

impl EntityRecord for DbColumnDefinitionsEntity {
    fn from_row(row: &Row<'_>) -> DbResult<Self> {
        Ok(Self {
            id: get_required_string(row, DbColumnDefinitions::ID)?,
            table_id: get_required_string(row, DbColumnDefinitions::TABLE_ID)?,
            element_key: get_required_string(row, DbColumnDefinitions::ELEMENT_KEY)?,
            element_name: get_string(row, DbColumnDefinitions::ELEMENT_NAME)?,
            element_type: get_string(row, DbColumnDefinitions::ELEMENT_TYPE)?,
            list_child_element_keys: get_string(
                row,
                DbColumnDefinitions::LIST_CHILD_ELEMENT_KEYS,
            )?,
            is_persisted: get_boolean(row, DbColumnDefinitions::IS_PERSISTED)?,
            joins: get_string(row, DbColumnDefinitions::JOINS)?,
        })
    }
}
