//! Identity keys derived from the MPN field.

use std::fmt;

use serde::Serialize;

use crate::record::CanonicalRecord;
use crate::value::CellValue;

/// Normalized part identity: the trimmed, upper-cased MPN.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct IdentityKey(String);

impl IdentityKey {
    /// Derives a key from a raw MPN value.
    ///
    /// Returns `None` ("no identity") for absent, empty, or whitespace-only
    /// values.
    pub fn from_value(value: Option<&CellValue>) -> Option<Self> {
        let rendered = value?.to_display_string();
        let trimmed = rendered.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(trimmed.to_uppercase()))
    }

    /// Derives a key from the given field of a canonical record.
    pub fn from_record(record: &CanonicalRecord, field: &str) -> Option<Self> {
        Self::from_value(record.get(field))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IdentityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
