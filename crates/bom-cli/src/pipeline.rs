//! Pipeline stages shared by the CLI commands.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bom_ingest::{IngestError, discover_source_files, read_source_file};
use bom_merge::{Batch, NormalizeOutcome};
use bom_model::CanonicalSchema;
use bom_output::SourceSummary;
use tracing::{debug, info, info_span, trace, warn};

use crate::logging::redact_value;

/// Loads the alias table from `path`, or the built-in table.
pub fn load_schema(path: Option<&Path>) -> Result<CanonicalSchema> {
    match path {
        Some(path) => {
            let schema = CanonicalSchema::from_json_path(path)
                .with_context(|| format!("load alias table {}", path.display()))?;
            info!(path = %path.display(), fields = schema.fields.len(), "loaded alias table");
            Ok(schema)
        }
        None => Ok(CanonicalSchema::default()),
    }
}

/// Expands folders into their source files, keeping argument order.
pub fn resolve_inputs(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for input in inputs {
        if input.is_dir() {
            let found = discover_source_files(input)
                .with_context(|| format!("scan folder {}", input.display()))?;
            if found.is_empty() {
                warn!(path = %input.display(), "folder contains no source files");
            }
            paths.extend(found);
        } else {
            paths.push(input.clone());
        }
    }
    Ok(paths)
}

/// Reads every path into a batch in the given order.
///
/// Empty files are skipped with a warning; any other read failure aborts.
pub fn load_batch(paths: &[PathBuf]) -> Result<Batch> {
    let span = info_span!("ingest", files = paths.len());
    let _guard = span.enter();
    let mut batch = Batch::new();
    for path in paths {
        match read_source_file(path) {
            Ok(file) => {
                debug!(
                    name = %file.name,
                    records = file.record_count(),
                    headers = file.headers.len(),
                    "source file loaded"
                );
                batch.push_file(file);
            }
            Err(IngestError::EmptyFile { path }) => {
                warn!(path = %path.display(), "skipping empty file");
            }
            Err(error) => {
                return Err(error).with_context(|| format!("read {}", path.display()));
            }
        }
    }
    info!(
        files = batch.files().len(),
        records = batch.record_count(),
        "ingestion complete"
    );
    Ok(batch)
}

/// Per-file summaries including header inventory counts.
pub fn source_summaries(batch: &Batch, schema: &CanonicalSchema) -> Vec<SourceSummary> {
    batch
        .files()
        .iter()
        .zip(batch.header_inventories(schema))
        .map(|(file, (_, inventory))| SourceSummary::new(file, &inventory))
        .collect()
}

/// Normalizes the batch; an empty result is an error.
pub fn normalize_batch(batch: &Batch, schema: &CanonicalSchema) -> Result<NormalizeOutcome> {
    let span = info_span!("normalize", records = batch.record_count());
    let _guard = span.enter();
    let outcome = batch.normalize(schema)?;
    for record in &outcome.normalized {
        let mpn = record
            .get(outcome.identity_field)
            .map(|value| value.to_display_string())
            .unwrap_or_default();
        trace!(mpn = redact_value(&mpn), fields = record.len(), "output record");
    }
    Ok(outcome)
}
