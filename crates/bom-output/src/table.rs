//! Tabular writers for record sequences.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use bom_model::Record;
use csv::WriterBuilder;

use crate::error::{OutputError, Result};

/// Union of field names across records, in first-seen order.
pub fn dataset_columns(records: &[Record]) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();
    for record in records {
        for name in record.names() {
            if !columns.iter().any(|column| column == name) {
                columns.push(name.to_string());
            }
        }
    }
    columns
}

/// Writes records as CSV with one column per field in [`dataset_columns`]
/// order. Missing fields are written as empty cells.
pub fn write_records_csv(path: &Path, records: &[Record]) -> Result<()> {
    let columns = dataset_columns(records);
    let csv_err = |source| OutputError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = WriterBuilder::new().from_path(path).map_err(csv_err)?;
    writer.write_record(&columns).map_err(csv_err)?;
    for record in records {
        let row: Vec<String> = columns
            .iter()
            .map(|column| {
                record
                    .get(column)
                    .map(|value| value.to_display_string())
                    .unwrap_or_default()
            })
            .collect();
        writer.write_record(&row).map_err(csv_err)?;
    }
    writer.flush().map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes records as a pretty-printed JSON array of objects.
pub fn write_records_json(path: &Path, records: &[Record]) -> Result<()> {
    let io_err = |source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, records).map_err(|source| OutputError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    writer.write_all(b"\n").map_err(io_err)?;
    writer.flush().map_err(io_err)
}

#[cfg(test)]
mod tests {
    use bom_model::CellValue;

    use super::*;

    #[test]
    fn columns_follow_first_appearance() {
        let records: Vec<Record> = vec![
            [("MPN", "A"), ("Manufacturer", "TI")].into_iter().collect(),
            [("Notes", "x"), ("MPN", "B")].into_iter().collect(),
            Record::new(),
        ];
        assert_eq!(dataset_columns(&records), vec!["MPN", "Manufacturer", "Notes"]);
    }

    #[test]
    fn writes_numbers_in_display_form() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let records: Vec<Record> = vec![
            [("MPN", CellValue::text("A")), ("Qty", CellValue::Number(100.0))]
                .into_iter()
                .collect(),
        ];
        write_records_csv(&path, &records).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "MPN,Qty\nA,100\n");
    }

    #[test]
    fn empty_input_writes_empty_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.json");
        write_records_json(&path, &[]).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]\n");
    }
}
