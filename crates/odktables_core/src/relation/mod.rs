//! Persistence-layer entity records.
//!
//! # Responsibility
//! - Declare one fixed-shape record per relation the sync service stores.
//! - Read those records from SQLite rows by stored field name.
//!
//! # Invariants
//! - Field names are declared once, as constants on the relation marker type
//!   (e.g. `DbTable::ROW_VERSION`).
//! - Lookup failures propagate as `DbError`; nothing is defaulted here.
//! - User-column cells are stored under `convert_identifier(column_id)`.

use crate::db::{DbError, DbResult};
use rusqlite::types::ValueRef;
use rusqlite::{Connection, Params, Row};

pub mod column_definitions;
pub mod data_table;
pub mod file_info;
pub mod key_value_store;
pub mod table_acl;
pub mod table_definitions;
pub mod table_entry;

pub use column_definitions::{DbColumnDefinitions, DbColumnDefinitionsEntity};
pub use data_table::{DbLogTable, DbLogTableEntity, DbTable, DbTableEntity, TableCells};
pub use file_info::{DbTableFileInfo, DbTableFileInfoEntity};
pub use key_value_store::{DbKeyValueStore, DbKeyValueStoreEntity};
pub use table_acl::{DbTableAcl, DbTableAclEntity};
pub use table_definitions::{DbTableDefinitions, DbTableDefinitionsEntity};
pub use table_entry::{DbTableEntry, DbTableEntryEntity};

/// Record whose shape is fully known from its relation.
pub trait EntityRecord: Sized {
    fn from_row(row: &Row<'_>) -> DbResult<Self>;
}

/// Record of a user data table; its shape depends on the table's columns.
pub trait TableRecord: Sized {
    fn from_row(row: &Row<'_>, columns: &[DbColumnDefinitionsEntity]) -> DbResult<Self>;
}

/// Maps a logical identifier to the identifier it is stored under.
///
/// `"my-col"` becomes `"_MY_COL"`.
pub fn convert_identifier(id: &str) -> String {
    format!("_{}", id.replace('-', "_").to_uppercase())
}

/// Runs `sql` and reads every result row as `E`.
pub fn fetch_entities<E: EntityRecord, P: Params>(
    conn: &Connection,
    sql: &str,
    params: P,
) -> DbResult<Vec<E>> {
    let mut stmt = conn.prepare(sql)?;
    let mut rows = stmt.query(params)?;
    let mut entities = Vec::new();

    while let Some(row) = rows.next()? {
        entities.push(E::from_row(row)?);
    }

    Ok(entities)
}

/// Runs `sql` against a user data table and reads every result row as `E`.
pub fn fetch_table_records<E: TableRecord, P: Params>(
    conn: &Connection,
    sql: &str,
    params: P,
    columns: &[DbColumnDefinitionsEntity],
) -> DbResult<Vec<E>> {
    let mut stmt = conn.prepare(sql)?;
    let mut rows = stmt.query(params)?;
    let mut records = Vec::new();

    while let Some(row) = rows.next()? {
        records.push(E::from_row(row, columns)?);
    }

    Ok(records)
}

pub(crate) fn get_required_string(row: &Row<'_>, field: &str) -> DbResult<String> {
    get_string(row, field)?.ok_or_else(|| DbError::invalid_data(field, "unexpected NULL"))
}

pub(crate) fn get_string(row: &Row<'_>, field: &str) -> DbResult<Option<String>> {
    Ok(row.get::<_, Option<String>>(field)?)
}

/// Booleans are stored as `0`/`1` integers.
pub(crate) fn get_boolean(row: &Row<'_>, field: &str) -> DbResult<Option<bool>> {
    match row.get::<_, Option<i64>>(field)? {
        None => Ok(None),
        Some(0) => Ok(Some(false)),
        Some(1) => Ok(Some(true)),
        Some(other) => Err(DbError::invalid_data(
            field,
            format!("expected 0 or 1, got {other}"),
        )),
    }
}

/// Dates are stored as Unix epoch milliseconds.
pub(crate) fn get_date(row: &Row<'_>, field: &str) -> DbResult<Option<i64>> {
    Ok(row.get::<_, Option<i64>>(field)?)
}

/// Reads any stored value as its string rendering.
pub(crate) fn get_as_string(row: &Row<'_>, field: &str) -> DbResult<Option<String>> {
    let value = match row.get_ref(field)? {
        ValueRef::Null => None,
        ValueRef::Integer(value) => Some(value.to_string()),
        ValueRef::Real(value) => Some(value.to_string()),
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => {
            Some(String::from_utf8_lossy(bytes).into_owned())
        }
    };
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::{convert_identifier, get_as_string, get_boolean};
    use crate::db::{open_db_in_memory, DbError};

    #[test]
    fn convert_identifier_prefixes_and_uppercases() {
        assert_eq!(convert_identifier("my-col"), "_MY_COL");
        assert_eq!(convert_identifier("Name"), "_NAME");
        assert_eq!(convert_identifier("_x"), "__X");
    }

    #[test]
    fn get_as_string_renders_every_storage_class() {
        let conn = open_db_in_memory().unwrap();
        let rendered = conn
            .query_row(
                "SELECT 42 AS i, 1.5 AS r, 'text' AS t, NULL AS n;",
                [],
                |row| {
                    Ok((
                        get_as_string(row, "i"),
                        get_as_string(row, "r"),
                        get_as_string(row, "t"),
                        get_as_string(row, "n"),
                    ))
                },
            )
            .unwrap();

        assert_eq!(rendered.0.unwrap().as_deref(), Some("42"));
        assert_eq!(rendered.1.unwrap().as_deref(), Some("1.5"));
        assert_eq!(rendered.2.unwrap().as_deref(), Some("text"));
        assert_eq!(rendered.3.unwrap(), None);
    }

    #[test]
    fn get_boolean_rejects_non_flag_integers() {
        let conn = open_db_in_memory().unwrap();
        let result = conn
            .query_row("SELECT 2 AS flag;", [], |row| Ok(get_boolean(row, "flag")))
            .unwrap();

        match result {
            Err(DbError::InvalidData { field, .. }) => assert_eq!(field, "flag"),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
