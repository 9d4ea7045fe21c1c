use odktables_core::relation::{
    DbColumnDefinitionsEntity, DbKeyValueStoreEntity, DbTableAclEntity, DbTableDefinitionsEntity,
    DbTableEntryEntity,
};
use odktables_core::{
    to_column, to_columns, to_field, to_field_from_column, to_fields, to_kvs_entries,
    to_table_acl, to_table_acls, to_table_definition, to_table_entries, to_table_entry,
    to_table_properties, Column, ConvertError, DataType, Scope, ScopeType, TableEntry, TableRole,
    TableType,
};

fn column_definition(id: &str, element_key: &str) -> DbColumnDefinitionsEntity {
    DbColumnDefinitionsEntity {
        id: id.to_string(),
        table_id: "household".to_string(),
        element_key: element_key.to_string(),
        element_name: Some(element_key.to_string()),
        element_type: Some("integer".to_string()),
        list_child_element_keys: Some("[]".to_string()),
        is_persisted: Some(true),
        joins: None,
    }
}

fn kvs_entity(key: &str, value: &str) -> DbKeyValueStoreEntity {
    DbKeyValueStoreEntity {
        table_id: "household".to_string(),
        partition: "Table".to_string(),
        aspect: "default".to_string(),
        key: key.to_string(),
        entry_type: Some("string".to_string()),
        value: Some(value.to_string()),
    }
}

fn acl_entity(scope_type: &str, scope_value: Option<&str>, role: &str) -> DbTableAclEntity {
    DbTableAclEntity {
        scope_type: scope_type.to_string(),
        scope_value: scope_value.map(str::to_string),
        role: role.to_string(),
    }
}

#[test]
fn table_entry_copies_every_field() {
    let entity = DbTableEntryEntity {
        id: "household".to_string(),
        table_key: "household_key".to_string(),
        data_etag: Some("data-3".to_string()),
        properties_etag: None,
    };

    let entry = to_table_entry(&entity);

    assert_eq!(
        entry,
        TableEntry::new("household", "household_key", Some("data-3".to_string()), None)
    );
}

#[test]
fn table_entries_preserve_order_and_accept_none() {
    let entities = vec![
        DbTableEntryEntity {
            id: "b".to_string(),
            table_key: "b_key".to_string(),
            data_etag: None,
            properties_etag: None,
        },
        DbTableEntryEntity {
            id: "a".to_string(),
            table_key: "a_key".to_string(),
            data_etag: None,
            properties_etag: None,
        },
    ];

    let ids: Vec<String> = to_table_entries(Some(entities.as_slice()))
        .into_iter()
        .map(|entry| entry.table_id)
        .collect();
    assert_eq!(ids, vec!["b", "a"]);
    assert!(to_table_entries(None).is_empty());
}

#[test]
fn column_copies_serialized_fields_verbatim() {
    let mut entity = column_definition("col-1", "age");
    entity.joins = Some(r#"[{"table_id":"people"}]"#.to_string());

    let column = to_column(&entity);

    assert_eq!(
        column,
        Column {
            table_id: "household".to_string(),
            element_key: "age".to_string(),
            element_name: Some("age".to_string()),
            element_type: Some("integer".to_string()),
            list_child_element_keys: Some("[]".to_string()),
            is_persisted: true,
            joins: Some(r#"[{"table_id":"people"}]"#.to_string()),
        }
    );
}

#[test]
fn column_without_persisted_flag_is_not_persisted() {
    let mut entity = column_definition("col-1", "age");
    entity.is_persisted = None;

    assert!(!to_column(&entity).is_persisted);
}

#[test]
fn none_lists_convert_to_empty() {
    assert!(to_columns(None).is_empty());
    assert!(to_kvs_entries(None).is_empty());
    assert!(to_fields(None).is_empty());
    assert!(to_table_acls(None).unwrap().is_empty());
}

#[test]
fn table_properties_wrap_entries_in_order() {
    let entities = vec![kvs_entity("displayName", "Households"), kvs_entity("color", "red")];

    let properties = to_table_properties(Some(entities.as_slice()), "household", Some("props-7"));

    assert_eq!(properties.table_id, "household");
    assert_eq!(properties.properties_etag.as_deref(), Some("props-7"));
    let keys: Vec<&str> = properties
        .kvs_entries
        .iter()
        .map(|entry| entry.key.as_str())
        .collect();
    assert_eq!(keys, vec!["displayName", "color"]);
    assert_eq!(properties.kvs_entries[0].entry_type.as_deref(), Some("string"));
    assert_eq!(properties.kvs_entries[0].value.as_deref(), Some("Households"));
}

#[test]
fn table_properties_from_none_has_no_entries() {
    let properties = to_table_properties(None, "household", None);
    assert!(properties.kvs_entries.is_empty());
    assert_eq!(properties.properties_etag, None);
}

#[test]
fn table_definition_combines_entry_and_definition() {
    let entry = TableEntry::new("household", "household_key", None, None);
    let definition = DbTableDefinitionsEntity {
        table_id: "household".to_string(),
        db_table_name: "ODKTABLES_HOUSEHOLD".to_string(),
        table_type: "DATA".to_string(),
        table_id_access_controls: Some("household_acl".to_string()),
    };

    let table = to_table_definition(&entry, &definition).unwrap();

    assert_eq!(table.table_id, "household");
    assert_eq!(table.table_key, "household_key");
    assert_eq!(table.db_table_name, "ODKTABLES_HOUSEHOLD");
    assert_eq!(table.table_type, TableType::Data);
    assert_eq!(table.table_id_access_controls.as_deref(), Some("household_acl"));
    assert_eq!(table.columns, None);

    let columns = to_columns(Some(vec![column_definition("col-1", "age")].as_slice()));
    let table = table.with_columns(columns.clone());
    assert_eq!(table.columns, Some(columns));
}

#[test]
fn table_definition_rejects_unknown_type() {
    let entry = TableEntry::new("household", "household_key", None, None);
    let definition = DbTableDefinitionsEntity {
        table_id: "household".to_string(),
        db_table_name: "ODKTABLES_HOUSEHOLD".to_string(),
        table_type: "data".to_string(),
        table_id_access_controls: None,
    };

    let err = to_table_definition(&entry, &definition).unwrap_err();
    assert_eq!(
        err,
        ConvertError::UnknownEnum {
            kind: "TableType",
            value: "data".to_string(),
        }
    );
}

#[test]
fn table_acl_parses_scope_and_role() {
    let acl = to_table_acl(&acl_entity("USER", Some("mailto:ann@example.org"), "WRITER")).unwrap();

    assert_eq!(
        acl.scope,
        Scope::new(ScopeType::User, Some("mailto:ann@example.org".to_string()))
    );
    assert_eq!(acl.role, TableRole::Writer);
}

#[test]
fn table_acls_fail_on_first_bad_entry() {
    let entities = vec![
        acl_entity("DEFAULT", None, "READER"),
        acl_entity("GROUP", Some("staff"), "ADMIN"),
        acl_entity("TEAM", Some("x"), "OWNER"),
    ];

    let err = to_table_acls(Some(entities.as_slice())).unwrap_err();
    assert_eq!(
        err,
        ConvertError::UnknownEnum {
            kind: "TableRole",
            value: "ADMIN".to_string(),
        }
    );
}

#[test]
fn fields_are_nullable_strings_named_by_storage_identifier() {
    let entities = vec![column_definition("col-1", "age"), column_definition("col-2", "name")];

    let fields = to_fields(Some(entities.as_slice()));

    let names: Vec<&str> = fields.iter().map(|field| field.name.as_str()).collect();
    assert_eq!(names, vec!["_COL_1", "_COL_2"]);
    assert!(fields
        .iter()
        .all(|field| field.data_type == DataType::String && field.nullable));
    assert_eq!(to_field(&entities[0]), fields[0]);
}

#[test]
fn field_from_column_uses_element_key() {
    let column = to_column(&column_definition("col-1", "head-count"));

    let field = to_field_from_column(&column);

    assert_eq!(field.name, "_HEAD_COUNT");
    assert_eq!(field.data_type, DataType::String);
}
