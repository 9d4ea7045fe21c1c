//! `DbTableFileInfo` relation: file attachments registered against a table.
//!
//! File-info records share the row metadata of data tables but expose a
//! fixed set of string columns instead of user-defined ones.

use super::{get_boolean, get_date, get_required_string, get_string, DbTable, EntityRecord};
use crate::db::DbResult;
use crate::model::field::DataField;
use rusqlite::Row;

pub struct DbTableFileInfo;

impl DbTableFileInfo {
    pub const TABLE_ID: &'static str = "_TABLE_ID";
    pub const KEY: &'static str = "_KEY";
    pub const PATH_TO_FILE: &'static str = "_PATH_TO_FILE";

    /// Columns surfaced as row values, in output order.
    pub const EXPOSED_COLUMNS: [&'static str; 3] = [Self::TABLE_ID, Self::KEY, Self::PATH_TO_FILE];

    /// Storage fields of the exposed columns. All of them are strings.
    pub fn exposed_fields() -> Vec<DataField> {
        Self::EXPOSED_COLUMNS
            .iter()
            .map(|name| DataField::string(*name))
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DbTableFileInfoEntity {
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
    pub table_id: Option<String>,
    pub key: Option<String>,
    pub path_to_file: Option<String>,
}

impl DbTableFileInfoEntity {
    /// Value of one exposed column; `None` for names outside
    /// `DbTableFileInfo::EXPOSED_COLUMNS`.
    pub fn exposed_value(&self, field: &str) -> Option<&str> {
        match field {
            DbTableFileInfo::TABLE_ID => self.table_id.as_deref(),
            DbTableFileInfo::KEY => self.key.as_deref(),
            DbTableFileInfo::PATH_TO_FILE => self.path_to_file.as_deref(),
            _ => None,
        }
    }
}

impl EntityRecord for DbTableFileInfoEntity {
    fn from_row(row: &Row<'_>) -> DbResult<Self> {
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
            table_id: get_string(row, DbTableFileInfo::TABLE_ID)?,
            key: get_string(row, DbTableFileInfo::KEY)?,
            path_to_file: get_string(row, DbTableFileInfo::PATH_TO_FILE)?,
        })
    }
}
