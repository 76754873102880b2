use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("failed to read alias table {path}: {source}")]
    AliasRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse alias table: {0}")]
    AliasParse(#[from] serde_json::Error),
    #[error("alias table has no '{field}' field")]
    MissingIdentityField { field: String },
    #[error("invalid alias table: {reason}")]
    InvalidSchema { reason: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
