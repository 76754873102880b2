//! JSON source files: an array of flat objects, one object per row.

use std::path::Path;

use bom_model::{CellValue, RawRecord, SourceFile};
use serde_json::{Number, Value};
use tracing::debug;

use crate::error::{IngestError, Result};
use crate::source_name;

/// Reads a JSON array of flat objects into a [`SourceFile`].
///
/// Strings stay text, numbers stay numbers, `null` is empty, and booleans
/// become `"true"`/`"false"`. Headers come from the first object's keys in
/// document order.
pub fn read_json_file(path: &Path) -> Result<SourceFile> {
    let contents = std::fs::read_to_string(path).map_err(|e| IngestError::open(path, e))?;
    if contents.trim().is_empty() {
        return Err(IngestError::EmptyFile {
            path: path.to_path_buf(),
        });
    }
    let document: Value =
        serde_json::from_str(&contents).map_err(|source| IngestError::JsonParse {
            path: path.to_path_buf(),
            source,
        })?;
    let Value::Array(rows) = document else {
        return Err(IngestError::JsonLayout {
            path: path.to_path_buf(),
            reason: "top-level value is not an array".to_string(),
        });
    };

    let mut headers: Vec<String> = Vec::new();
    let mut records = Vec::with_capacity(rows.len());
    for (row_idx, row) in rows.into_iter().enumerate() {
        let Value::Object(object) = row else {
            return Err(IngestError::JsonLayout {
                path: path.to_path_buf(),
                reason: format!("row {} is not an object", row_idx + 1),
            });
        };
        if row_idx == 0 {
            headers = object.keys().cloned().collect();
        }
        let mut record = RawRecord::with_capacity(object.len());
        for (header, value) in object {
            let cell = match value {
                Value::Null => CellValue::Empty,
                Value::String(text) if text.is_empty() => CellValue::Empty,
                Value::String(text) => CellValue::Text(text),
                Value::Number(number) => number_cell(&number),
                Value::Bool(flag) => CellValue::Text(flag.to_string()),
                Value::Array(_) | Value::Object(_) => {
                    return Err(IngestError::UnsupportedValue {
                        path: path.to_path_buf(),
                        header,
                        row: row_idx + 1,
                    });
                }
            };
            record.insert(header, cell);
        }
        records.push(record);
    }

    debug!(
        path = %path.display(),
        headers = headers.len(),
        records = records.len(),
        "read JSON file"
    );
    Ok(SourceFile::new(source_name(path), headers, records))
}

/// Largest integer magnitude an `f64` holds exactly.
const MAX_EXACT_INTEGER: u64 = 1 << 53;

/// Keeps a JSON number numeric only when `f64` represents it exactly.
///
/// Larger integers (long numeric part numbers) stay text in their JSON
/// spelling so that distinct values never collapse.
fn number_cell(number: &Number) -> CellValue {
    if let Some(int) = number.as_i64() {
        if int.unsigned_abs() <= MAX_EXACT_INTEGER {
            return CellValue::Number(int as f64);
        }
        return CellValue::Text(number.to_string());
    }
    if let Some(uint) = number.as_u64() {
        if uint <= MAX_EXACT_INTEGER {
            return CellValue::Number(uint as f64);
        }
        return CellValue::Text(number.to_string());
    }
    number
        .as_f64()
        .map_or_else(|| CellValue::Text(number.to_string()), CellValue::Number)
}
