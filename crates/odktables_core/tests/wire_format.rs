use odktables_core::{
    KeyValueStoreEntry, Row, Scope, ScopeType, TableAcl, TableDefinition, TableEntry, TableRole,
    TableType,
};
use std::collections::BTreeMap;

#[test]
fn table_entry_uses_etag_field_names() {
    let entry = TableEntry::new("household", "household_key", Some("d1".to_string()), None);

    let json = serde_json::to_value(&entry).unwrap();
    assert_eq!(json["tableId"], "household");
    assert_eq!(json["tableKey"], "household_key");
    assert_eq!(json["dataETag"], "d1");
    assert!(json["propertiesETag"].is_null());
}

#[test]
fn table_definition_serializes_type_name() {
    let definition = TableDefinition {
        table_id: "household".to_string(),
        columns: None,
        table_key: "household_key".to_string(),
        db_table_name: "ODKTABLES_HOUSEHOLD".to_string(),
        table_type: TableType::Security,
        table_id_access_controls: None,
    };

    let json = serde_json::to_value(&definition).unwrap();
    assert_eq!(json["type"], "SECURITY");
    assert_eq!(json["dbTableName"], "ODKTABLES_HOUSEHOLD");
    assert!(json["columns"].is_null());
}

#[test]
fn acl_and_kvs_entry_use_upstream_names() {
    let acl = TableAcl::new(
        Scope::new(ScopeType::Group, Some("staff".to_string())),
        TableRole::FilteredReader,
    );
    let json = serde_json::to_value(&acl).unwrap();
    assert_eq!(json["scope"]["type"], "GROUP");
    assert_eq!(json["scope"]["value"], "staff");
    assert_eq!(json["role"], "FILTERED_READER");

    let entry = KeyValueStoreEntry {
        table_id: "household".to_string(),
        partition: "Column".to_string(),
        aspect: "size".to_string(),
        key: "displayVisible".to_string(),
        entry_type: Some("boolean".to_string()),
        value: Some("true".to_string()),
    };
    let json = serde_json::to_value(&entry).unwrap();
    assert_eq!(json["type"], "boolean");
    assert_eq!(json["tableId"], "household");
}

#[test]
fn row_serializes_and_decodes() {
    let mut values = BTreeMap::new();
    values.insert("name".to_string(), Some("Smith".to_string()));
    values.insert("size".to_string(), None);
    let row = Row {
        row_id: "uuid:1".to_string(),
        row_etag: Some("v1".to_string()),
        filter_scope: Scope::EMPTY,
        values,
        ..Row::default()
    };

    let json = serde_json::to_value(&row).unwrap();
    assert_eq!(json["rowId"], "uuid:1");
    assert_eq!(json["rowETag"], "v1");
    assert!(json["filterScope"]["type"].is_null());
    assert_eq!(json["values"]["name"], "Smith");
    assert!(json["values"]["size"].is_null());

    let decoded: Row = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, row);
}
