//! BOM data ingestion utilities.
//!
//! Reads distributor exports and BOM sheets into [`SourceFile`] values:
//! the raw header row plus one raw record per data row.
//!
//! # Features
//!
//! - **CSV Loading**: header row detection, BOM stripping, ragged rows
//! - **JSON Loading**: arrays of flat objects with typed scalars
//! - **Discovery**: list supported files in a folder in a stable order
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use bom_ingest::{discover_source_files, read_source_file};
//!
//! for path in discover_source_files(Path::new("quotes"))? {
//!     let file = read_source_file(&path)?;
//!     println!("{}: {} rows", file.name, file.record_count());
//! }
//! ```

mod csv_file;
mod discovery;
mod error;
mod json_file;

use std::path::Path;

use bom_model::SourceFile;

// === Error Types ===
pub use error::{IngestError, Result};

// === Readers ===
pub use csv_file::read_csv_file;
pub use json_file::read_json_file;

// === File Discovery ===
pub use discovery::{SourceKind, discover_source_files, source_kind};

/// Reads a source file, choosing the reader by extension.
pub fn read_source_file(path: &Path) -> Result<SourceFile> {
    match source_kind(path) {
        Some(SourceKind::Csv) => read_csv_file(path),
        Some(SourceKind::Json) => read_json_file(path),
        None => Err(IngestError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}

/// Display name for a source path: its file name, or the full path.
pub(crate) fn source_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
