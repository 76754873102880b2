use serde::Serialize;

use crate::record::RawRecord;

/// One ingested tabular file: its header row and data rows in file order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SourceFile {
    /// Display name, usually the file name.
    pub name: String,
    /// Raw header strings from the first row, in column order.
    pub headers: Vec<String>,
    pub records: Vec<RawRecord>,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, headers: Vec<String>, records: Vec<RawRecord>) -> Self {
        Self {
            name: name.into(),
            headers,
            records,
        }
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }
}
