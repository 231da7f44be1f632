//! Schemas declared in configuration files.

use crate::common::*;
use tempfile::TempDir;

const USER_SCHEMA: &str = r#"
# Login record
[attributes]
username = "string"
password = "string"
"#;

#[test]
fn toml_schema_builds_user() {
    init_tracing();
    let mut user = SchemaConfig::from_toml_str(USER_SCHEMA)
        .unwrap()
        .to_entity()
        .unwrap();
    user.set("username", "Igor").unwrap();
    assert_eq!(user.get("username"), Ok(&Value::from("Igor")));
    assert!(matches!(
        user.set("index", 1),
        Err(Error::SealViolation { .. })
    ));
}

#[test]
fn file_schema_matches_inline_schema() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("user.toml");
    std::fs::write(&path, USER_SCHEMA).unwrap();

    let from_file = SchemaConfig::from_file(&path).unwrap().to_schema().unwrap();
    let inline = Schema::from_declarations([("username", "string"), ("password", "string")])
        .unwrap();
    assert_eq!(from_file, inline);
}

#[test]
fn json_schema_with_every_kind() {
    let config = SchemaConfig::from_json_str(
        r#"{
            "attributes": {
                "o": "object", "s": "string", "a": "array", "r": "regexp",
                "n": "number", "b": "boolean", "f": "function", "d": "date"
            }
        }"#,
    )
    .unwrap();
    let schema = config.to_schema().unwrap();
    let kinds: Vec<Kind> = schema.accessors().iter().map(|a| a.kind()).collect();
    assert_eq!(kinds, Kind::ASSIGNABLE);
}

#[test]
fn reserved_label_in_config_is_a_declaration_error() {
    let config = SchemaConfig::from_toml_str("[attributes]\nmissing = \"undefined\"\n").unwrap();
    let err = config.to_entity().unwrap_err();
    assert!(matches!(err, Error::InvalidKindDeclaration { .. }));
}
