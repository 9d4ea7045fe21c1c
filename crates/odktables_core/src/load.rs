//! Load-then-convert helpers over caller-supplied queries.
//!
//! # Responsibility
//! - Read entity records with a caller's SQL and convert them in one step.
//!
//! # Invariants
//! - The caller owns the query; these helpers never build SQL.
//! - Store lookup failures and conversion failures stay distinguishable.

use crate::converter::{to_rows, to_rows_from_file_info, to_table_acls, RowSource};
use crate::db::DbError;
use crate::model::acl::TableAcl;
use crate::model::error::ConvertError;
use crate::model::row::Row;
use crate::relation::{
    fetch_entities, fetch_table_records, DbColumnDefinitionsEntity, DbLogTableEntity,
    DbTableAclEntity, DbTableEntity, DbTableFileInfoEntity,
};
use rusqlite::{Connection, Params};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RelationResult<T> = Result<T, RelationError>;

#[derive(Debug)]
pub enum RelationError {
    Db(DbError),
    Convert(ConvertError),
}

impl Display for RelationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Convert(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RelationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Convert(err) => Some(err),
        }
    }
}

impl From<DbError> for RelationError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<ConvertError> for RelationError {
    fn from(value: ConvertError) -> Self {
        Self::Convert(value)
    }
}

/// Loads live data-table rows selected by `sql`.
pub fn load_rows<P: Params>(
    conn: &Connection,
    sql: &str,
    params: P,
    columns: &[DbColumnDefinitionsEntity],
) -> RelationResult<Vec<Row>> {
    let sources = fetch_table_records::<DbTableEntity, _>(conn, sql, params, columns)?
        .into_iter()
        .map(RowSource::from)
        .collect::<Vec<_>>();
    Ok(to_rows(&sources, columns)?)
}

/// Loads change-log rows selected by `sql`.
pub fn load_log_rows<P: Params>(
    conn: &Connection,
    sql: &str,
    params: P,
    columns: &[DbColumnDefinitionsEntity],
) -> RelationResult<Vec<Row>> {
    let sources = fetch_table_records::<DbLogTableEntity, _>(conn, sql, params, columns)?
        .into_iter()
        .map(RowSource::from)
        .collect::<Vec<_>>();
    Ok(to_rows(&sources, columns)?)
}

/// Loads file-info rows selected by `sql`, without deleted ones.
pub fn load_file_info_rows<P: Params>(
    conn: &Connection,
    sql: &str,
    params: P,
) -> RelationResult<Vec<Row>> {
    let entities = fetch_entities::<DbTableFileInfoEntity, _>(conn, sql, params)?;
    Ok(to_rows_from_file_info(&entities)?)
}

pub fn load_table_acls<P: Params>(
    conn: &Connection,
    sql: &str,
    params: P,
) -> RelationResult<Vec<TableAcl>> {
    let entities = fetch_entities::<DbTableAclEntity, _>(conn, sql, params)?;
    Ok(to_table_acls(Some(entities.as_slice()))?)
}
