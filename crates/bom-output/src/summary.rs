//! Run summary written alongside the exported datasets.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use bom_map::HeaderInventory;
use bom_model::{MergeStats, SourceFile};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::error::{OutputError, Result};

/// Per-file ingestion details.
#[derive(Debug, Clone, Serialize)]
pub struct SourceSummary {
    pub name: String,
    pub records: usize,
    pub headers: usize,
    pub recognized_headers: usize,
    /// Headers with no alias match, kept verbatim as their own fields.
    pub passthrough_headers: Vec<String>,
}

impl SourceSummary {
    pub fn new(file: &SourceFile, inventory: &HeaderInventory) -> Self {
        Self {
            name: file.name.clone(),
            records: file.record_count(),
            headers: file.headers.len(),
            recognized_headers: inventory.recognized().count(),
            passthrough_headers: inventory.passthrough().map(str::to_string).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub generated_at: String,
    pub identity_field: String,
    pub stats: MergeStats,
    pub sources: Vec<SourceSummary>,
    pub outputs: Vec<PathBuf>,
}

impl RunSummary {
    pub fn new(identity_field: &str, stats: MergeStats, sources: Vec<SourceSummary>) -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            identity_field: identity_field.to_string(),
            stats,
            sources,
            outputs: Vec::new(),
        }
    }
}

pub fn write_run_summary(path: &Path, summary: &RunSummary) -> Result<()> {
    let io_err = |source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, summary).map_err(|source| OutputError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    writer.write_all(b"\n").map_err(io_err)?;
    writer.flush().map_err(io_err)
}
