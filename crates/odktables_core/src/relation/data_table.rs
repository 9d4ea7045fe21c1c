//! User data tables (`DbTable`) and their change logs (`DbLogTable`).
//!
//! # Responsibility
//! - Name the metadata fields every data and log table carries.
//! - Read live and log records together with their user-column cells.
//!
//! # Invariants
//! - Cells are keyed by storage identifier, not by element key.
//! - Every column definition passed in yields exactly one cell entry.

use super::{
    convert_identifier, get_as_string, get_boolean, get_date, get_required_string, get_string,
    DbColumnDefinitionsEntity, TableRecord,
};
use crate::converter::to_fields;
use crate::db::DbResult;
use crate::model::field::{DataField, DataType};
use rusqlite::Row;
use std::collections::BTreeMap;

/// User-column cells keyed by storage identifier.
pub type TableCells = BTreeMap<String, Option<String>>;

/// Field names of a live user data table.
pub struct DbTable;

impl DbTable {
    /// Primary key; holds the row id.
    pub const ID: &'static str = "_URI";
    pub const ROW_VERSION: &'static str = "_ROW_VERSION";
    pub const DATA_ETAG_AT_MODIFICATION: &'static str = "_DATA_ETAG_AT_MODIFICATION";
    pub const DELETED: &'static str = "_DELETED";
    pub const CREATE_USER: &'static str = "_CREATE_USER";
    pub const LAST_UPDATE_USER: &'static str = "_LAST_UPDATE_USER";
    pub const FILTER_TYPE: &'static str = "_FILTER_TYPE";
    pub const FILTER_VALUE: &'static str = "_FILTER_VALUE";
    pub const URI_ACCESS_CONTROL: &'static str = "_URI_ACCESS_CONTROL";
    pub const FORM_ID: &'static str = "_FORM_ID";
    pub const INSTANCE_NAME: &'static str = "_INSTANCE_NAME";
    pub const LOCALE: &'static str = "_LOCALE";
    pub const TIMESTAMP: &'static str = "_TIMESTAMP";

    /// Typed metadata fields present on every live data table.
    pub fn metadata_fields() -> Vec<DataField> {
        vec![
            DataField::new(Self::ID, DataType::String, false),
            DataField::new(Self::ROW_VERSION, DataType::String, false),
            DataField::new(Self::DATA_ETAG_AT_MODIFICATION, DataType::String, true),
            DataField::new(Self::DELETED, DataType::Boolean, false),
            DataField::string(Self::CREATE_USER),
            DataField::string(Self::LAST_UPDATE_USER),
            DataField::string(Self::FILTER_TYPE),
            DataField::string(Self::FILTER_VALUE),
            DataField::string(Self::URI_ACCESS_CONTROL),
            DataField::string(Self::FORM_ID),
            DataField::string(Self::INSTANCE_NAME),
            DataField::string(Self::LOCALE),
            DataField::new(Self::TIMESTAMP, DataType::DateTime, true),
        ]
    }

    /// Full storage layout of a data table: metadata fields followed by one
    /// string field per user column, in column order.
    pub fn data_fields(columns: &[DbColumnDefinitionsEntity]) -> Vec<DataField> {
        let mut fields = Self::metadata_fields();
        fields.extend(to_fields(Some(columns)));
        fields
    }
}

/// One record of a live user data table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DbTableEntity {
    pub id: String,
    pub row_version: Option<String>,
    pub data_etag_at_modification: Option<String>,
    pub deleted: Option<bool>,
    pub create_user: Option<String>,
    pub last_update_user: Option<String>,
    pub filter_type: Option<String>,
    pub filter_value: Option<String>,
    pub uri_access_control: Option<String>,
    pub form_id: Option<String>,
    pub instance_name: Option<String>,
    pub locale: Option<String>,
    pub timestamp: Option<i64>,
    pub cells: TableCells,
}

impl DbTableEntity {
    /// Looks up a cell by storage identifier.
    pub fn get_as_string(&self, field: &str) -> Option<&str> {
        self.cells.get(field).and_then(|value| value.as_deref())
    }
}

impl TableRecord for DbTableEntity {
    fn from_row(row: &Row<'_>, columns: &[DbColumnDefinitionsEntity]) -> DbResult<Self> {
        Ok(Self {
            id: get_required_string(row, DbTable::ID)?,
            row_version: get_string(row, DbTable::ROW_VERSION)?,
            data_etag_at_modification: get_string(row, DbTable::DATA_ETAG_AT_MODIFICATION)?,
            deleted: get_boolean(row, DbTable::DELETED)?,
            create_user: get_string(row, DbTable::CREATE_USER)?,
            last_update_user: get_string(row, DbTable::LAST_UPDATE_USER)?,
            filter_type: get_string(row, DbTable::FILTER_TYPE)?,
            filter_value: get_string(row, DbTable::FILTER_VALUE)?,
            uri_access_control: get_string(row, DbTable::URI_ACCESS_CONTROL)?,
            form_id: get_string(row, DbTable::FORM_ID)?,
            instance_name: get_string(row, DbTable::INSTANCE_NAME)?,
            locale: get_string(row, DbTable::LOCALE)?,
            timestamp: get_date(row, DbTable::TIMESTAMP)?,
            cells: read_cells(row, columns)?,
        })
    }
}

/// Field names of a data table's change log.
pub struct DbLogTable;

impl DbLogTable {
    /// Id of the logged row. The log record's own primary key is not exposed.
    pub const ROW_ID: &'static str = "_ROW_ID";
    pub const ROW_VERSION: &'static str = "_ROW_VERSION";
    pub const DATA_ETAG_AT_MODIFICATION: &'static str = "_DATA_ETAG_AT_MODIFICATION";
    pub const DELETED: &'static str = "_DELETED";
    pub const CREATE_USER: &'static str = "_CREATE_USER";
    pub const LAST_UPDATE_USER: &'static str = "_LAST_UPDATE_USER";
    pub const FILTER_TYPE: &'static str = "_FILTER_TYPE";
    pub const FILTER_VALUE: &'static str = "_FILTER_VALUE";
}

/// One change-log record: a snapshot of a row at one version.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DbLogTableEntity {
    pub row_id: String,
    pub row_version: Option<String>,
    pub data_etag_at_modification: Option<String>,
    pub deleted: Option<bool>,
    pub create_user: Option<String>,
    pub last_update_user: Option<String>,
    pub filter_type: Option<String>,
    pub filter_value: Option<String>,
    pub cells: TableCells,
}

impl DbLogTableEntity {
    /// Looks up a cell by storage identifier.
    pub fn get_as_string(&self, field: &str) -> Option<&str> {
        self.cells.get(field).and_then(|value| value.as_deref())
    }
}

impl TableRecord for DbLogTableEntity {
    fn from_row(row: &Row<'_>, columns: &[DbColumnDefinitionsEntity]) -> DbResult<Self> {
        Ok(Self {
            row_id: get_required_string(row, DbLogTable::ROW_ID)?,
            row_version: get_string(row, DbLogTable::ROW_VERSION)?,
            data_etag_at_modification: get_string(row, DbLogTable::DATA_ETAG_AT_MODIFICATION)?,
            deleted: get_boolean(row, DbLogTable::DELETED)?,
            create_user: get_string(row, DbLogTable::CREATE_USER)?,
            last_update_user: get_string(row, DbLogTable::LAST_UPDATE_USER)?,
            filter_type: get_string(row, DbLogTable::FILTER_TYPE)?,
            filter_value: get_string(row, DbLogTable::FILTER_VALUE)?,
            cells: read_cells(row, columns)?,
        })
    }
}

fn read_cells(row: &Row<'_>, columns: &[DbColumnDefinitionsEntity]) -> DbResult<TableCells> {
    let mut cells = TableCells::new();
    for column in columns {
        let field = convert_identifier(&column.id);
        let value = get_as_string(row, &field)?;
        cells.insert(field, value);
    }
    Ok(cells)
}
