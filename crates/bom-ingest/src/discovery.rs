//! Source file discovery.

use std::path::{Path, PathBuf};

use crate::error::{IngestError, Result};

/// Supported tabular formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Csv,
    Json,
}

/// Classifies a path by extension (case-insensitive).
pub fn source_kind(path: &Path) -> Option<SourceKind> {
    let ext = path.extension()?.to_str()?;
    if ext.eq_ignore_ascii_case("csv") {
        Some(SourceKind::Csv)
    } else if ext.eq_ignore_ascii_case("json") {
        Some(SourceKind::Json)
    } else {
        None
    }
}

/// Lists supported source files in a directory (non-recursive).
///
/// Returns files sorted by filename so submission order is reproducible.
pub fn discover_source_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let path = entry.path();
        if path.is_file() && source_kind(&path).is_some() {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(files)
}
