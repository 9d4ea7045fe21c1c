//! Entity-to-domain converters.
//!
//! # Responsibility
//! - Copy fields of persisted entity records into domain values.
//! - Parse stored enum names strictly.
//!
//! # Invariants
//! - Conversions are pure: no storage access, no shared state.
//! - List conversions preserve input order; a `None` list yields an empty one.
//! - An unknown enum name fails the whole conversion with `ConvertError`.

use crate::model::acl::{Scope, ScopeType, TableAcl, TableRole};
use crate::model::error::{ConvertError, ConvertResult};
use crate::model::field::DataField;
use crate::model::table::{
    Column, KeyValueStoreEntry, TableDefinition, TableEntry, TableProperties, TableType,
};
use crate::relation::{
    convert_identifier, DbColumnDefinitionsEntity, DbKeyValueStoreEntity, DbTableAclEntity,
    DbTableDefinitionsEntity, DbTableEntryEntity,
};
use log::{debug, warn};
use std::str::FromStr;

mod row;

pub use row::{
    to_row, to_row_from_file_info, to_row_from_log_table, to_rows, to_rows_from_file_info,
    RowSource,
};

pub fn to_table_entry(entity: &DbTableEntryEntity) -> TableEntry {
    TableEntry::new(
        entity.id.as_str(),
        entity.table_key.as_str(),
        entity.data_etag.clone(),
        entity.properties_etag.clone(),
    )
}

pub fn to_table_entries(entities: Option<&[DbTableEntryEntity]>) -> Vec<TableEntry> {
    let entries: Vec<TableEntry> = entities
        .unwrap_or_default()
        .iter()
        .map(to_table_entry)
        .collect();
    debug!(
        "event=table_entries_convert module=converter status=ok count={}",
        entries.len()
    );
    entries
}

/// A missing persisted flag reads as `false`.
pub fn to_column(entity: &DbColumnDefinitionsEntity) -> Column {
    Column {
        table_id: entity.table_id.clone(),
        element_key: entity.element_key.clone(),
        element_name: entity.element_name.clone(),
        element_type: entity.element_type.clone(),
        list_child_element_keys: entity.list_child_element_keys.clone(),
        is_persisted: entity.is_persisted.unwrap_or(false),
        joins: entity.joins.clone(),
    }
}

pub fn to_columns(entities: Option<&[DbColumnDefinitionsEntity]>) -> Vec<Column> {
    let columns: Vec<Column> = entities.unwrap_or_default().iter().map(to_column).collect();
    debug!(
        "event=columns_convert module=converter status=ok count={}",
        columns.len()
    );
    columns
}

pub fn to_kvs_entry(entity: &DbKeyValueStoreEntity) -> KeyValueStoreEntry {
    KeyValueStoreEntry {
        table_id: entity.table_id.clone(),
        partition: entity.partition.clone(),
        aspect: entity.aspect.clone(),
        key: entity.key.clone(),
        entry_type: entity.entry_type.clone(),
        value: entity.value.clone(),
    }
}

pub fn to_kvs_entries(entities: Option<&[DbKeyValueStoreEntity]>) -> Vec<KeyValueStoreEntry> {
    entities
        .unwrap_or_default()
        .iter()
        .map(to_kvs_entry)
        .collect()
}

/// Bundles a table's key-value-store entries under its properties etag.
pub fn to_table_properties(
    entities: Option<&[DbKeyValueStoreEntity]>,
    table_id: &str,
    properties_etag: Option<&str>,
) -> TableProperties {
    let entries = to_kvs_entries(entities);
    debug!(
        "event=table_properties_convert module=converter status=ok table_id={} count={}",
        table_id,
        entries.len()
    );
    TableProperties::new(properties_etag.map(str::to_string), table_id, entries)
}

/// Builds a definition from the registry entry and the definition record of
/// the same table.
///
/// The table key comes from `entry`; every other field comes from
/// `definition`. `columns` is left `None`.
///
/// # Errors
/// - Returns `ConvertError::UnknownEnum` when the stored type is not a
///   `TableType` name.
pub fn to_table_definition(
    entry: &TableEntry,
    definition: &DbTableDefinitionsEntity,
) -> ConvertResult<TableDefinition> {
    let table_type: TableType = parse_enum(&definition.table_type)?;
    Ok(TableDefinition {
        table_id: definition.table_id.clone(),
        columns: None,
        table_key: entry.table_key.clone(),
        db_table_name: definition.db_table_name.clone(),
        table_type,
        table_id_access_controls: definition.table_id_access_controls.clone(),
    })
}

/// # Errors
/// - Returns `ConvertError::UnknownEnum` for an unknown scope type or role.
pub fn to_table_acl(entity: &DbTableAclEntity) -> ConvertResult<TableAcl> {
    let scope_type: ScopeType = parse_enum(&entity.scope_type)?;
    let role: TableRole = parse_enum(&entity.role)?;
    Ok(TableAcl::new(
        Scope::new(scope_type, entity.scope_value.clone()),
        role,
    ))
}

/// Stops at the first entry that fails to convert.
pub fn to_table_acls(entities: Option<&[DbTableAclEntity]>) -> ConvertResult<Vec<TableAcl>> {
    let acls = entities
        .unwrap_or_default()
        .iter()
        .map(to_table_acl)
        .collect::<ConvertResult<Vec<_>>>()?;
    debug!(
        "event=table_acls_convert module=converter status=ok count={}",
        acls.len()
    );
    Ok(acls)
}

/// Storage field of a column, named after its element key.
pub fn to_field_from_column(column: &Column) -> DataField {
    DataField::string(convert_identifier(&column.element_key))
}

/// Storage field of a column definition, named after its id.
///
/// User columns are always nullable strings, whatever `element_type` says.
pub fn to_field(entity: &DbColumnDefinitionsEntity) -> DataField {
    DataField::string(convert_identifier(&entity.id))
}

pub fn to_fields(entities: Option<&[DbColumnDefinitionsEntity]>) -> Vec<DataField> {
    entities.unwrap_or_default().iter().map(to_field).collect()
}

pub(crate) fn parse_enum<T>(value: &str) -> ConvertResult<T>
where
    T: FromStr<Err = ConvertError>,
{
    value.parse::<T>().map_err(|err| {
        warn!("event=enum_parse module=converter status=error error={err}");
        err
    })
}

#[cfg(test)]
mod tests {
    use super::parse_enum;
    use crate::model::acl::TableRole;
    use crate::model::error::ConvertError;
    use crate::model::table::TableType;

    #[test]
    fn parse_enum_accepts_exact_names() {
        assert_eq!(parse_enum::<TableType>("SHORTCUT").unwrap(), TableType::Shortcut);
        assert_eq!(
            parse_enum::<TableRole>("FILTERED_WRITER").unwrap(),
            TableRole::FilteredWriter
        );
    }

    #[test]
    fn parse_enum_reports_kind_and_value() {
        let err = parse_enum::<TableType>(" DATA").unwrap_err();
        assert_eq!(
            err,
            ConvertError::UnknownEnum {
                kind: "TableType",
                value: " DATA".to_string(),
            }
        );
        assert_eq!(err.to_string(), "no TableType constant named ` DATA`");
    }
}
