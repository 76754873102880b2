//! Tests for bom-model types.

use std::io::Write;
use std::path::Path;

use bom_model::{CanonicalSchema, CellValue, IdentityKey, MergeStats, ModelError, Record};
use tempfile::NamedTempFile;

#[test]
fn loads_alias_table_from_file() {
    let mut file = NamedTempFile::new().expect("create temp file");
    write!(
        file,
        r#"{{"fields": [{{"name": "MPN", "aliases": ["MPN", "Part No"]}}, {{"name": "Manufacturer", "aliases": ["Maker"]}}]}}"#
    )
    .expect("write alias table");

    let schema = CanonicalSchema::from_json_path(file.path()).expect("load schema");
    assert_eq!(schema.field_names().collect::<Vec<_>>(), vec!["MPN", "Manufacturer"]);
    assert_eq!(schema.fields[0].aliases, vec!["MPN", "Part No"]);
}

#[test]
fn missing_alias_file_reports_path() {
    let err = CanonicalSchema::from_json_path(Path::new("/nonexistent/aliases.json")).unwrap_err();
    assert!(matches!(err, ModelError::AliasRead { .. }));
    assert!(err.to_string().contains("/nonexistent/aliases.json"));
}

#[test]
fn malformed_alias_file_is_parse_error() {
    let err = CanonicalSchema::from_json_str("{not json").unwrap_err();
    assert!(matches!(err, ModelError::AliasParse(_)));
}

#[test]
fn identity_from_record_field() {
    let record: Record = [("MPN", CellValue::text(" lm358n ")), ("Qty", CellValue::Number(4.0))]
        .into_iter()
        .collect();
    let key = IdentityKey::from_record(&record, "MPN").expect("identity");
    assert_eq!(key.to_string(), "LM358N");
    assert_eq!(IdentityKey::from_record(&record, "Missing"), None);
}

#[test]
fn stats_serialize_with_field_names() {
    let json = serde_json::to_value(MergeStats::new(2, 1)).expect("serialize stats");
    assert_eq!(json, serde_json::json!({"total": 1, "merged": 1, "original": 2}));
}
