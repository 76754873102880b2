//! Header inventory: how each raw header of a file resolves.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::canonical::{HeaderCanonicalizer, HeaderResolution};

/// One raw header and the canonical field it resolved to, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderEntry {
    pub raw: String,
    pub canonical: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HeaderInventory {
    pub entries: Vec<HeaderEntry>,
}

impl HeaderInventory {
    pub fn build(canonicalizer: &HeaderCanonicalizer<'_>, headers: &[String]) -> Self {
        let entries = headers
            .iter()
            .map(|raw| HeaderEntry {
                raw: raw.clone(),
                canonical: match canonicalizer.resolve(raw) {
                    HeaderResolution::Canonical(name) => Some(name.to_string()),
                    HeaderResolution::Passthrough => None,
                },
            })
            .collect();
        Self { entries }
    }

    pub fn recognized(&self) -> impl Iterator<Item = &HeaderEntry> {
        self.entries.iter().filter(|entry| entry.canonical.is_some())
    }

    pub fn passthrough(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|entry| entry.canonical.is_none())
            .map(|entry| entry.raw.as_str())
    }

    /// Canonical fields claimed by more than one raw header.
    ///
    /// In each row only the last of these columns survives mapping.
    pub fn collisions(&self) -> BTreeMap<String, Vec<String>> {
        let mut by_field: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for entry in &self.entries {
            if let Some(field) = &entry.canonical {
                by_field
                    .entry(field.clone())
                    .or_default()
                    .push(entry.raw.clone());
            }
        }
        by_field.retain(|_, raws| raws.len() > 1);
        by_field
    }
}
