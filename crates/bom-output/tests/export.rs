//! End-to-end export tests: raw records through merge to files on disk.

use std::fs;

use bom_merge::normalize_raw;
use bom_model::{CanonicalSchema, CellValue, MergeOptions, OutputFormat, RawRecord};
use bom_output::export_outcome;

fn quotes() -> Vec<RawRecord> {
    vec![
        [
            ("Mfr. #", CellValue::text("GRM188R71H104KA93D")),
            ("Mfr.", CellValue::text("Murata")),
            ("Price (USD)", CellValue::Empty),
            ("MOQ", CellValue::text("10")),
        ]
        .into_iter()
        .collect(),
        [
            ("Manufacturer Part Number", CellValue::text("grm188r71h104ka93d ")),
            ("Manufacturer", CellValue::Empty),
            ("Unit Price", CellValue::text("0.10")),
            ("Datasheet", CellValue::text("https://example.com/grm.pdf")),
        ]
        .into_iter()
        .collect(),
        [
            ("Description", CellValue::text("Jumper wire")),
            ("RoHS", CellValue::text("Yes")),
        ]
        .into_iter()
        .collect(),
    ]
}

#[test]
fn exports_merged_and_condensed_csv() {
    let dir = tempfile::tempdir().expect("temp dir");
    let outcome = normalize_raw(&CanonicalSchema::default(), quotes());

    let paths = export_outcome(dir.path(), &outcome, &MergeOptions::default(), Vec::new())
        .expect("export");

    let merged = fs::read_to_string(paths.merged.expect("merged path")).expect("read merged");
    insta::assert_snapshot!(merged, @r"
MPN,Manufacturer,Unit Price,Min/Mult (MOQ),Datasheet,Description,RoHS
GRM188R71H104KA93D,Murata,0.10,10,https://example.com/grm.pdf,,
,,,,,Jumper wire,Yes
");

    let condensed =
        fs::read_to_string(paths.condensed.expect("condensed path")).expect("read condensed");
    insta::assert_snapshot!(condensed, @r"
Manufacturer,MPN,Min / Mult (MOQ),Unit Price,Stock Status,Quantity Avail.,Description,Datasheet,Product Link
Murata,GRM188R71H104KA93D,10,0.10,,,,https://example.com/grm.pdf,
,,,,,,Jumper wire,,
");

    let summary: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&paths.summary).expect("read summary"))
            .expect("parse summary");
    assert_eq!(summary["stats"]["original"], 3);
    assert_eq!(summary["stats"]["total"], 2);
    assert_eq!(summary["outputs"].as_array().map(Vec::len), Some(2));
}

#[test]
fn exports_json_views_only_when_requested() {
    let dir = tempfile::tempdir().expect("temp dir");
    let outcome = normalize_raw(&CanonicalSchema::default(), quotes());
    let options = MergeOptions::new()
        .with_format(OutputFormat::Json)
        .with_merged(false);

    let paths = export_outcome(dir.path(), &outcome, &options, Vec::new()).expect("export");
    assert!(paths.merged.is_none());
    let condensed_path = paths.condensed.expect("condensed path");
    assert_eq!(
        condensed_path.extension().and_then(|ext| ext.to_str()),
        Some("json")
    );

    let condensed: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(condensed_path).expect("read condensed"))
            .expect("parse condensed");
    assert_eq!(condensed[0]["Min / Mult (MOQ)"], "10");
    assert_eq!(condensed[1]["Description"], "Jumper wire");
    assert_eq!(condensed[1]["MPN"], "");
}

#[test]
fn condensed_json_columns_never_mix_null_and_text() {
    let dir = tempfile::tempdir().expect("temp dir");
    let records: Vec<RawRecord> = vec![
        [
            ("Mfr. #", CellValue::text("X1")),
            ("Datasheet", CellValue::Empty),
        ]
        .into_iter()
        .collect(),
    ];
    let outcome = normalize_raw(&CanonicalSchema::default(), records);
    let options = MergeOptions::new()
        .with_format(OutputFormat::Json)
        .with_merged(false);

    let paths = export_outcome(dir.path(), &outcome, &options, Vec::new()).expect("export");
    let condensed: serde_json::Value = serde_json::from_str(
        &fs::read_to_string(paths.condensed.expect("condensed path")).expect("read condensed"),
    )
    .expect("parse condensed");
    assert_eq!(condensed[0]["Datasheet"], "");
    assert_eq!(condensed[0]["Product Link"], "");
}
