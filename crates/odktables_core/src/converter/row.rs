//! Row converters for live data tables, change logs and file-info records.
//!
//! All three sources share the same reconstruction rules:
//! - a missing deleted flag reads as `false`;
//! - no filter type gives `Scope::EMPTY`, a `DEFAULT` filter type gives a
//!   default scope without value, any other type carries the filter value;
//! - user-column values are keyed by element key, one entry per column.

use super::parse_enum;
use crate::model::acl::{Scope, ScopeType};
use crate::model::error::ConvertResult;
use crate::model::row::{Row, RowValues};
use crate::relation::{
    convert_identifier, DbColumnDefinitionsEntity, DbLogTableEntity, DbTableEntity,
    DbTableFileInfo, DbTableFileInfoEntity, TableCells,
};
use log::debug;

/// Record a row can be rebuilt from when reading a data table or its log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowSource {
    Table(DbTableEntity),
    Log(DbLogTableEntity),
}

impl From<DbTableEntity> for RowSource {
    fn from(value: DbTableEntity) -> Self {
        Self::Table(value)
    }
}

impl From<DbLogTableEntity> for RowSource {
    fn from(value: DbLogTableEntity) -> Self {
        Self::Log(value)
    }
}

/// Converts a live data-table record, including its access-control, form,
/// instance, locale and timestamp metadata.
pub fn to_row(entity: &DbTableEntity, columns: &[DbColumnDefinitionsEntity]) -> ConvertResult<Row> {
    Ok(Row {
        row_id: entity.id.clone(),
        row_etag: entity.row_version.clone(),
        data_etag_at_modification: entity.data_etag_at_modification.clone(),
        deleted: entity.deleted.unwrap_or(false),
        create_user: entity.create_user.clone(),
        last_update_user: entity.last_update_user.clone(),
        uri_user: entity.uri_access_control.clone(),
        form_id: entity.form_id.clone(),
        instance_name: entity.instance_name.clone(),
        locale: entity.locale.clone(),
        timestamp: entity.timestamp,
        filter_scope: to_filter_scope(
            entity.filter_type.as_deref(),
            entity.filter_value.as_deref(),
        )?,
        values: to_row_values(&entity.cells, columns),
    })
}

/// Converts a change-log record. The row id is the logged row's id, and the
/// metadata fields the log does not keep stay `None`.
pub fn to_row_from_log_table(
    entity: &DbLogTableEntity,
    columns: &[DbColumnDefinitionsEntity],
) -> ConvertResult<Row> {
    Ok(Row {
        row_id: entity.row_id.clone(),
        row_etag: entity.row_version.clone(),
        data_etag_at_modification: entity.data_etag_at_modification.clone(),
        deleted: entity.deleted.unwrap_or(false),
        create_user: entity.create_user.clone(),
        last_update_user: entity.last_update_user.clone(),
        filter_scope: to_filter_scope(
            entity.filter_type.as_deref(),
            entity.filter_value.as_deref(),
        )?,
        values: to_row_values(&entity.cells, columns),
        ..Row::default()
    })
}

/// Converts a file-info record. Values are the exposed file-info columns
/// keyed by field name.
pub fn to_row_from_file_info(entity: &DbTableFileInfoEntity) -> ConvertResult<Row> {
    let values = DbTableFileInfo::EXPOSED_COLUMNS
        .iter()
        .map(|name| {
            (
                (*name).to_string(),
                entity.exposed_value(name).map(str::to_string),
            )
        })
        .collect::<RowValues>();

    Ok(Row {
        row_id: entity.id.clone(),
        row_etag: entity.row_version.clone(),
        data_etag_at_modification: entity.data_etag_at_modification.clone(),
        deleted: entity.deleted.unwrap_or(false),
        create_user: entity.create_user.clone(),
        last_update_user: entity.last_update_user.clone(),
        uri_user: entity.uri_access_control.clone(),
        form_id: entity.form_id.clone(),
        instance_name: entity.instance_name.clone(),
        locale: entity.locale.clone(),
        timestamp: entity.timestamp,
        filter_scope: to_filter_scope(
            entity.filter_type.as_deref(),
            entity.filter_value.as_deref(),
        )?,
        values,
    })
}

/// Converts live or log records in order.
pub fn to_rows(
    entities: &[RowSource],
    columns: &[DbColumnDefinitionsEntity],
) -> ConvertResult<Vec<Row>> {
    let rows = entities
        .iter()
        .map(|source| match source {
            RowSource::Table(entity) => to_row(entity, columns),
            RowSource::Log(entity) => to_row_from_log_table(entity, columns),
        })
        .collect::<ConvertResult<Vec<_>>>()?;
    debug!(
        "event=rows_convert module=converter status=ok source=table count={} columns={}",
        rows.len(),
        columns.len()
    );
    Ok(rows)
}

/// Converts file-info records in order, dropping deleted ones.
pub fn to_rows_from_file_info(entities: &[DbTableFileInfoEntity]) -> ConvertResult<Vec<Row>> {
    let mut rows = Vec::with_capacity(entities.len());
    for entity in entities {
        let row = to_row_from_file_info(entity)?;
        if row.is_active() {
            rows.push(row);
        }
    }
    debug!(
        "event=rows_convert module=converter status=ok source=file_info total={} kept={}",
        entities.len(),
        rows.len()
    );
    Ok(rows)
}

fn to_filter_scope(filter_type: Option<&str>, filter_value: Option<&str>) -> ConvertResult<Scope> {
    let Some(filter_type) = filter_type else {
        return Ok(Scope::EMPTY);
    };

    let scope_type: ScopeType = parse_enum(filter_type)?;
    if scope_type == ScopeType::Default {
        return Ok(Scope::default_scope());
    }
    Ok(Scope::new(scope_type, filter_value.map(str::to_string)))
}

fn to_row_values(cells: &TableCells, columns: &[DbColumnDefinitionsEntity]) -> RowValues {
    columns
        .iter()
        .map(|column| {
            let value = cells
                .get(&convert_identifier(&column.id))
                .cloned()
                .flatten();
            (column.element_key.clone(), value)
        })
        .collect()
}
