//! Scalar cell values.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single cell as read from a source file.
///
/// Values are carried through mapping and merging exactly as ingested; the
/// engine never converts between variants.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Text(String),
    #[default]
    Empty,
}

impl CellValue {
    /// Creates a text value.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Returns true for `Empty` and for the empty string.
    ///
    /// Whitespace-only text is not blank.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(text) => text.is_empty(),
            Self::Number(_) => false,
        }
    }

    /// Returns the text payload, if any.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Renders the value as it would appear in an exported cell.
    ///
    /// Numbers use their shortest display form (`1234`, `0.25`) and `Empty`
    /// renders as the empty string.
    pub fn to_display_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(number) => write!(f, "{number}"),
            Self::Text(text) => f.write_str(text),
            Self::Empty => Ok(()),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}
