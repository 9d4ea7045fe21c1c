//! `DbTableAcl` relation: access-control entries of a table.

use super::{get_required_string, get_string, EntityRecord};
use crate::db::DbResult;
use rusqlite::Row;

pub struct DbTableAcl;

impl DbTableAcl {
    pub const SCOPE_TYPE: &'static str = "SCOPE_TYPE";
    pub const SCOPE_VALUE: &'static str = "SCOPE_VALUE";
    pub const ROLE: &'static str = "ROLE";
}

/// Scope type and role stay raw strings until conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbTableAclEntity {
    pub scope_type: String,
    pub scope_value: Option<String>,
    pub role: String,
}

impl EntityRecord for DbTableAclEntity {
    fn from_row(row: &Row<'_>) -> DbResult<Self> {
        Ok(Self {
            scope_type: get_required_string(row, DbTableAcl::SCOPE_TYPE)?,
            scope_value: get_string(row, DbTableAcl::SCOPE_VALUE)?,
            role: get_required_string(row, DbTableAcl::ROLE)?,
        })
    }
}
