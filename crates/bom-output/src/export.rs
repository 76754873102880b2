//! Writes the views of one normalization run to an output directory.

use std::path::{Path, PathBuf};

use bom_merge::{NormalizeOutcome, condense};
use bom_model::{MergeOptions, OutputFormat, Record};
use tracing::info;

use crate::error::{OutputError, Result};
use crate::summary::{RunSummary, SourceSummary, write_run_summary};
use crate::table::{write_records_csv, write_records_json};

pub const MERGED_STEM: &str = "merged";
pub const CONDENSED_STEM: &str = "condensed";
pub const SUMMARY_FILE: &str = "summary.json";

/// Files produced by [`export_outcome`].
#[derive(Debug, Clone, Default)]
pub struct ExportPaths {
    pub merged: Option<PathBuf>,
    pub condensed: Option<PathBuf>,
    pub summary: PathBuf,
}

/// Writes the merged dataset, its condensed view, and `summary.json`.
///
/// Which views are written and in which format follows `options`.
pub fn export_outcome(
    output_dir: &Path,
    outcome: &NormalizeOutcome,
    options: &MergeOptions,
    sources: Vec<SourceSummary>,
) -> Result<ExportPaths> {
    std::fs::create_dir_all(output_dir).map_err(|source| OutputError::CreateDir {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let mut paths = ExportPaths {
        summary: output_dir.join(SUMMARY_FILE),
        ..ExportPaths::default()
    };
    if options.write_merged {
        let path = view_path(output_dir, MERGED_STEM, options.format);
        write_view(&path, &outcome.normalized, options.format)?;
        info!(path = %path.display(), records = outcome.normalized.len(), "wrote merged dataset");
        paths.merged = Some(path);
    }
    if options.write_condensed {
        let path = view_path(output_dir, CONDENSED_STEM, options.format);
        let condensed = condense(&outcome.normalized);
        write_view(&path, &condensed, options.format)?;
        info!(path = %path.display(), records = condensed.len(), "wrote condensed view");
        paths.condensed = Some(path);
    }

    let mut summary = RunSummary::new(outcome.identity_field, outcome.stats, sources);
    summary.outputs = paths
        .merged
        .iter()
        .chain(paths.condensed.iter())
        .cloned()
        .collect();
    write_run_summary(&paths.summary, &summary)?;
    Ok(paths)
}

fn view_path(dir: &Path, stem: &str, format: OutputFormat) -> PathBuf {
    dir.join(format!("{stem}.{}", format.extension()))
}

fn write_view(path: &Path, records: &[Record], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Csv => write_records_csv(path, records),
        OutputFormat::Json => write_records_json(path, records),
    }
}
