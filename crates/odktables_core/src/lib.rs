//! Entity conversion layer for ODK Tables synchronization.
//! Maps persisted relation records onto the domain values the sync API serves.

pub mod converter;
pub mod db;
pub mod load;
pub mod logging;
pub mod model;
pub mod relation;

pub use converter::{
    to_column, to_columns, to_field, to_field_from_column, to_fields, to_kvs_entries,
    to_kvs_entry, to_row, to_row_from_file_info, to_row_from_log_table, to_rows,
    to_rows_from_file_info, to_table_acl, to_table_acls, to_table_definition, to_table_entries,
    to_table_entry, to_table_properties, RowSource,
};
pub use load::{RelationError, RelationResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::acl::{Scope, ScopeType, TableAcl, TableRole};
pub use model::error::{ConvertError, ConvertResult};
pub use model::field::{DataField, DataType};
pub use model::row::{Row, RowValues};
pub use model::table::{
    Column, KeyValueStoreEntry, TableDefinition, TableEntry, TableProperties, TableType,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
