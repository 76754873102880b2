//! Error types for BOM data ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading source files.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Directory not found or not readable.
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Source file not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Format Errors ===
    /// File extension is not a supported tabular format.
    #[error("unsupported file format: {path} (expected .csv or .json)")]
    UnsupportedFormat { path: PathBuf },

    /// Failed to parse CSV.
    #[error("failed to parse CSV {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Failed to parse JSON.
    #[error("failed to parse JSON {path}: {source}")]
    JsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// JSON document is not an array of objects.
    #[error("unexpected JSON layout in {path}: {reason}")]
    JsonLayout { path: PathBuf, reason: String },

    /// A cell holds a nested array or object.
    #[error("unsupported value for '{header}' in {path} row {row}")]
    UnsupportedValue {
        path: PathBuf,
        header: String,
        row: usize,
    },

    /// File has no header row.
    #[error("file is empty: {path}")]
    EmptyFile { path: PathBuf },
}

impl IngestError {
    pub(crate) fn open(path: &std::path::Path, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::FileRead {
                path: path.to_path_buf(),
                source: err,
            }
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/path/to/quote.csv"),
        };
        assert_eq!(err.to_string(), "file not found: /path/to/quote.csv");
    }

    #[test]
    fn test_open_error_not_found() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = IngestError::open(std::path::Path::new("a.csv"), io);
        assert!(matches!(err, IngestError::FileNotFound { .. }));
    }

    #[test]
    fn test_open_error_other() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = IngestError::open(std::path::Path::new("a.csv"), io);
        assert!(matches!(err, IngestError::FileRead { .. }));
    }
}
