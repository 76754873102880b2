//! Configuration options for a merge run.

use serde::{Deserialize, Serialize};

/// Tabular format used for exported datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

impl OutputFormat {
    /// File extension for this format, without the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

/// Options controlling which views a merge run exports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeOptions {
    /// Write the full merged dataset.
    pub write_merged: bool,

    /// Write the condensed projection.
    pub write_condensed: bool,

    /// Format for both exported views.
    pub format: OutputFormat,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            write_merged: true,
            write_condensed: true,
            format: OutputFormat::default(),
        }
    }
}

impl MergeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_condensed(mut self, enable: bool) -> Self {
        self.write_condensed = enable;
        self
    }

    pub fn with_merged(mut self, enable: bool) -> Self {
        self.write_merged = enable;
        self
    }
}
