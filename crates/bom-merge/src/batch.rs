//! Caller-owned batch of ingested source files.

use bom_map::{HeaderInventory, RowMapper};
use bom_model::{CanonicalSchema, SourceFile};
use tracing::{debug, info_span};

use crate::engine::{MergeEngine, NormalizeOutcome};
use crate::error::{MergeError, Result};

/// Source files in submission order.
///
/// Records reach the merge engine in file order, then row order within each
/// file, regardless of how the files were read.
#[derive(Debug, Clone, Default)]
pub struct Batch {
    files: Vec<SourceFile>,
}

impl Batch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_file(&mut self, file: SourceFile) {
        self.files.push(file);
    }

    pub fn files(&self) -> &[SourceFile] {
        &self.files
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn record_count(&self) -> usize {
        self.files.iter().map(SourceFile::record_count).sum()
    }

    /// Header inventory for every file, in submission order.
    pub fn header_inventories(&self, schema: &CanonicalSchema) -> Vec<(String, HeaderInventory)> {
        let mapper = RowMapper::new(schema);
        self.files
            .iter()
            .map(|file| {
                (
                    file.name.clone(),
                    HeaderInventory::build(mapper.canonicalizer(), &file.headers),
                )
            })
            .collect()
    }

    /// Maps and merges every record of the batch.
    ///
    /// # Errors
    ///
    /// Returns [`MergeError::NoData`] when the merged dataset is empty,
    /// including when no files were submitted.
    pub fn normalize(&self, schema: &CanonicalSchema) -> Result<NormalizeOutcome> {
        let mapper = RowMapper::new(schema);
        let mut engine = MergeEngine::new();
        for file in &self.files {
            let span = info_span!("file", name = %file.name);
            let _guard = span.enter();
            engine.extend(file.records.iter().cloned().map(|raw| mapper.map_row(raw)));
            debug!(
                records = file.record_count(),
                identities = engine.identity_count(),
                "file folded"
            );
        }
        let outcome = engine.finish();
        if outcome.is_empty() {
            return Err(MergeError::NoData {
                files: self.files.len(),
            });
        }
        Ok(outcome)
    }
}

impl FromIterator<SourceFile> for Batch {
    fn from_iter<I: IntoIterator<Item = SourceFile>>(iter: I) -> Self {
        Self {
            files: iter.into_iter().collect(),
        }
    }
}
