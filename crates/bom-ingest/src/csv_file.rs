//! CSV source files.

use std::borrow::Cow;
use std::collections::HashSet;
use std::fs::File;
use std::path::Path;

use bom_model::{CellValue, RawRecord, SourceFile};
use csv::{ByteRecord, ReaderBuilder};
use tracing::debug;

use crate::error::{IngestError, Result};
use crate::source_name;

/// Reads a CSV file into a [`SourceFile`].
///
/// The first row with any non-empty cell is the header row. Header strings
/// are kept as written apart from a leading byte-order mark. Empty cells
/// become [`CellValue::Empty`], everything else stays text.
pub fn read_csv_file(path: &Path) -> Result<SourceFile> {
    let file = File::open(path).map_err(|e| IngestError::open(path, e))?;
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.byte_records() {
        let record = record.map_err(|source| IngestError::CsvParse {
            path: path.to_path_buf(),
            source,
        })?;
        if record.iter().all(<[u8]>::is_empty) {
            continue;
        }
        rows.push(decode_row(&record, path));
    }

    let mut rows = rows.into_iter();
    let Some(header_row) = rows.next() else {
        return Err(IngestError::EmptyFile {
            path: path.to_path_buf(),
        });
    };
    let columns = header_columns(header_row, path);
    let headers: Vec<String> = columns.iter().map(|(_, header)| header.clone()).collect();

    let mut records = Vec::new();
    for row in rows {
        if row.len() > columns.len() {
            debug!(
                path = %path.display(),
                cells = row.len(),
                columns = columns.len(),
                "row longer than header, extra cells ignored"
            );
        }
        let mut record = RawRecord::with_capacity(columns.len());
        for (idx, header) in &columns {
            let value = match row.get(*idx).map(String::as_str) {
                None | Some("") => CellValue::Empty,
                Some(text) => CellValue::text(text),
            };
            record.insert(header.as_str(), value);
        }
        records.push(record);
    }

    debug!(
        path = %path.display(),
        headers = headers.len(),
        records = records.len(),
        "read CSV file"
    );
    Ok(SourceFile::new(source_name(path), headers, records))
}

/// Decodes one row as UTF-8, replacing invalid bytes with U+FFFD.
///
/// Legacy exports (Windows-1252 `µ`, `Ω`) would otherwise fail the whole file.
fn decode_row(record: &ByteRecord, path: &Path) -> Vec<String> {
    let line = record.position().map_or(0, csv::Position::line);
    record
        .iter()
        .map(|field| match String::from_utf8_lossy(field) {
            Cow::Borrowed(text) => text.to_string(),
            Cow::Owned(text) => {
                debug!(path = %path.display(), line, "invalid UTF-8 replaced");
                text
            }
        })
        .collect()
}

/// Picks the usable header columns as `(column index, header)` pairs.
///
/// Blank headers are dropped. A repeated header is renamed `<header>_<n>`
/// with the smallest `n` not already taken, so its column is kept as a
/// separate field.
fn header_columns(row: Vec<String>, path: &Path) -> Vec<(usize, String)> {
    let mut headers: Vec<(usize, String)> = Vec::with_capacity(row.len());
    for (idx, raw) in row.into_iter().enumerate() {
        let header = if idx == 0 {
            raw.trim_start_matches('\u{feff}').to_string()
        } else {
            raw
        };
        if header.trim().is_empty() {
            debug!(path = %path.display(), column = idx, "blank header, column skipped");
            continue;
        }
        headers.push((idx, header));
    }

    // Every spelling in the row is reserved so a rename never shadows a
    // header that appears verbatim further right.
    let spelled: HashSet<String> = headers.iter().map(|(_, header)| header.clone()).collect();
    let mut used: HashSet<String> = HashSet::with_capacity(headers.len());
    let mut columns = Vec::with_capacity(headers.len());
    for (idx, header) in headers {
        if used.insert(header.clone()) {
            columns.push((idx, header));
            continue;
        }
        let mut n = 1;
        let renamed = loop {
            let candidate = format!("{header}_{n}");
            if !spelled.contains(&candidate) && !used.contains(&candidate) {
                break candidate;
            }
            n += 1;
        };
        debug!(path = %path.display(), header = %header, renamed = %renamed, "duplicate header renamed");
        used.insert(renamed.clone());
        columns.push((idx, renamed));
    }
    columns
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_read_csv_file_basic() {
        let file = create_temp_csv("MPN,Mfr,Qty\nLM358N,TI,10\nNE555,,5\n");
        let source = read_csv_file(file.path()).unwrap();

        assert_eq!(source.headers, vec!["MPN", "Mfr", "Qty"]);
        assert_eq!(source.record_count(), 2);
        assert_eq!(source.records[0].get("Qty"), Some(&CellValue::text("10")));
        assert_eq!(source.records[1].get("Mfr"), Some(&CellValue::Empty));
    }

    #[test]
    fn test_read_csv_file_with_bom() {
        let file = create_temp_csv("\u{feff}MPN,Description\nX1,Widget\n");
        let source = read_csv_file(file.path()).unwrap();
        assert_eq!(source.headers, vec!["MPN", "Description"]);
    }

    #[test]
    fn test_read_csv_file_keeps_header_spelling() {
        let file = create_temp_csv(" Mfr. Part # ,Unit Price\nA,1\n");
        let source = read_csv_file(file.path()).unwrap();
        assert_eq!(source.headers[0], " Mfr. Part # ");
    }

    #[test]
    fn test_read_csv_file_skips_blank_rows_and_pads_short_rows() {
        let file = create_temp_csv(",,\nMPN,Mfr,Qty\n,,\nX1\n");
        let source = read_csv_file(file.path()).unwrap();
        assert_eq!(source.headers, vec!["MPN", "Mfr", "Qty"]);
        assert_eq!(source.record_count(), 1);
        assert_eq!(source.records[0].len(), 3);
        assert_eq!(source.records[0].get("Qty"), Some(&CellValue::Empty));
    }

    #[test]
    fn test_read_csv_file_duplicate_and_blank_headers() {
        let file = create_temp_csv("MPN,,MPN,Notes,Notes\nA,x,B,a,b\n");
        let source = read_csv_file(file.path()).unwrap();
        assert_eq!(source.headers, vec!["MPN", "MPN_1", "Notes", "Notes_1"]);
        let record = &source.records[0];
        assert_eq!(record.get("MPN"), Some(&CellValue::text("A")));
        assert_eq!(record.get("MPN_1"), Some(&CellValue::text("B")));
        assert_eq!(record.get("Notes"), Some(&CellValue::text("a")));
        assert_eq!(record.get("Notes_1"), Some(&CellValue::text("b")));
        assert_eq!(record.len(), 4);
    }

    #[test]
    fn test_read_csv_file_renamed_duplicate_skips_existing_spelling() {
        let file = create_temp_csv("Notes,Notes,Notes_1\na,b,c\n");
        let source = read_csv_file(file.path()).unwrap();
        assert_eq!(source.headers, vec!["Notes", "Notes_2", "Notes_1"]);
        assert_eq!(source.records[0].get("Notes_2"), Some(&CellValue::text("b")));
        assert_eq!(source.records[0].get("Notes_1"), Some(&CellValue::text("c")));
    }

    #[test]
    fn test_read_csv_file_invalid_utf8_is_replaced() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"MPN,Description\nC0603,100nF 50V \xb5 \xd9\n").unwrap();
        let source = read_csv_file(file.path()).unwrap();
        assert_eq!(source.record_count(), 1);
        assert_eq!(source.records[0].get("MPN"), Some(&CellValue::text("C0603")));
        assert_eq!(
            source.records[0].get("Description"),
            Some(&CellValue::text("100nF 50V \u{fffd} \u{fffd}"))
        );
    }

    #[test]
    fn test_read_csv_file_empty() {
        let file = create_temp_csv("");
        let result = read_csv_file(file.path());
        assert!(matches!(result, Err(IngestError::EmptyFile { .. })));
    }

    #[test]
    fn test_read_csv_file_header_only() {
        let file = create_temp_csv("MPN,Mfr\n");
        let source = read_csv_file(file.path()).unwrap();
        assert_eq!(source.headers.len(), 2);
        assert_eq!(source.record_count(), 0);
    }

    #[test]
    fn test_read_csv_file_not_found() {
        let result = read_csv_file(Path::new("/nonexistent/quote.csv"));
        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }
}
