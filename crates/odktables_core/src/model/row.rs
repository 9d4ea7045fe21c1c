//! Row domain value.
//!
//! # Responsibility
//! - Carry one synchronized row: identity, version tags, audit fields,
//!   filter scope and user-column values.
//!
//! # Invariants
//! - `values` is keyed by column element key, never by storage identifier.
//! - Cell values are strings regardless of the column's logical type.
//! - `filter_scope` is always present; "no filter" is `Scope::EMPTY`.

use super::acl::Scope;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// User-column values keyed by element key. A column with no stored value
/// still has an entry, mapped to `None`.
pub type RowValues = BTreeMap<String, Option<String>>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Row {
    pub row_id: String,
    #[serde(rename = "rowETag")]
    pub row_etag: Option<String>,
    #[serde(rename = "dataETagAtModification")]
    pub data_etag_at_modification: Option<String>,
    pub deleted: bool,
    pub create_user: Option<String>,
    pub last_update_user: Option<String>,
    /// Access-control user the row is attributed to.
    pub uri_user: Option<String>,
    pub form_id: Option<String>,
    pub instance_name: Option<String>,
    pub locale: Option<String>,
    /// Unix epoch milliseconds.
    pub timestamp: Option<i64>,
    pub filter_scope: Scope,
    pub values: RowValues,
}

impl Row {
    /// Returns whether this row should be visible to readers.
    pub fn is_active(&self) -> bool {
        !self.deleted
    }
}
