//! Schemas loaded from JSON
#![cfg(feature = "serde")]

use std::collections::HashMap;

use spanner_ddl::prelude::*;
use spanner_ddl::GenerationType;

const SCHEMA_JSON: &str = r#"{
    "t1": {
        "id": "t1",
        "name": "Singers",
        "colIds": ["c1", "c2"],
        "colDefs": {
            "c1": { "id": "c1", "name": "SingerId", "type": { "name": "INT64" }, "notNull": true },
            "c2": {
                "id": "c2",
                "name": "Name",
                "type": { "name": "STRING", "len": 9223372036854775807 },
                "defaultValue": { "isPresent": true, "value": { "expressionId": "e1", "statement": "'unknown'" } }
            }
        },
        "primaryKeys": [{ "colId": "c1", "order": 1 }]
    },
    "t2": {
        "id": "t2",
        "name": "Albums",
        "colIds": ["c1", "c2", "c3"],
        "colDefs": {
            "c1": { "id": "c1", "name": "SingerId", "type": { "name": "INT64" }, "notNull": true },
            "c2": {
                "id": "c2",
                "name": "AlbumId",
                "type": { "name": "STRING", "len": 36 },
                "autoGen": { "name": "UUID", "generationType": "Pre-defined" }
            },
            "c3": { "id": "c3", "name": "Tags", "type": { "name": "STRING", "len": 64, "isArray": true } }
        },
        "primaryKeys": [{ "colId": "c2", "order": 2, "desc": true }, { "colId": "c1", "order": 1 }],
        "parentTable": { "id": "t1", "onDelete": "CASCADE", "interleaveType": "IN PARENT" }
    }
}"#;

fn schema() -> Schema {
    serde_json::from_str(SCHEMA_JSON).expect("valid schema json")
}

#[test]
fn test_deserialize_schema() {
    let schema = schema();
    assert_eq!(schema.len(), 2);

    let albums = schema.get("t2").unwrap();
    assert_eq!(albums.parent_id(), Some("t1"));
    assert_eq!(
        albums.col_defs["c2"].auto_gen.generation_type,
        GenerationType::PreDefined
    );
    assert!(albums.col_defs["c3"].ty.is_array);
    assert_eq!(schema.get("t1").unwrap().col_defs["c2"].ty.len, Length::Max);
}

#[test]
fn test_generate_from_json() {
    let statements = DdlGenerator::new(Config::default())
        .generate(&schema(), &HashMap::new())
        .unwrap();

    assert_eq!(
        statements,
        [
            "CREATE TABLE `Singers` (\n\
             \t`SingerId` INT64 NOT NULL,\n\
             \t`Name` STRING(MAX) DEFAULT ('unknown'),\n\
             ) PRIMARY KEY (`SingerId`)",
            "CREATE TABLE `Albums` (\n\
             \t`SingerId` INT64 NOT NULL,\n\
             \t`AlbumId` STRING(36) DEFAULT (GENERATE_UUID()),\n\
             \t`Tags` ARRAY<STRING(64)>,\n\
             ) PRIMARY KEY (`SingerId`, `AlbumId` DESC),\n\
             INTERLEAVE IN PARENT `Singers` ON DELETE CASCADE",
        ]
    );
}

#[test]
fn test_schema_json_roundtrip() {
    let schema = schema();
    let json = serde_json::to_string(&schema).unwrap();
    let back: Schema = serde_json::from_str(&json).unwrap();
    assert_eq!(back, schema);
}

#[test]
fn test_config_from_toml_drives_output() {
    let config = Config::parse(
        r#"
dialect = "postgresql"
source = "postgres"
"#,
    )
    .unwrap();

    let statements = DdlGenerator::new(config)
        .generate(&schema(), &HashMap::new())
        .unwrap();
    assert!(
        statements[0].starts_with("CREATE TABLE \"Singers\" (\n\t\"SingerId\" INT8 NOT NULL,")
    );
    assert!(statements[1].contains("\t\"Tags\" VARCHAR(2621440),"));
    assert!(statements[1].ends_with(") INTERLEAVE IN PARENT \"Singers\" ON DELETE CASCADE"));
}
