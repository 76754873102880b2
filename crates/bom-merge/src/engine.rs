//! Identity-keyed merge engine.

use std::collections::HashMap;

use bom_map::RowMapper;
use bom_model::{
    CanonicalRecord, CanonicalSchema, IDENTITY_FIELD, IdentityKey, MergeStats, RawRecord,
};
use serde::Serialize;
use tracing::{info, trace};

/// Result of a normalization run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NormalizeOutcome {
    /// Identified records in first-seen order, then unidentified records in
    /// input order.
    pub normalized: Vec<CanonicalRecord>,
    /// Canonical field used to derive identity keys.
    pub identity_field: &'static str,
    pub stats: MergeStats,
}

impl NormalizeOutcome {
    pub fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }
}

/// Folds canonical records into one resident record per identity key.
///
/// The engine owns every record it receives until [`MergeEngine::finish`]
/// hands the merged dataset back to the caller. One engine serves one run.
#[derive(Debug, Default)]
pub struct MergeEngine {
    keyed: Vec<CanonicalRecord>,
    slots: HashMap<IdentityKey, usize>,
    unkeyed: Vec<CanonicalRecord>,
    received: usize,
}

impl MergeEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds the next record in ingestion order.
    pub fn push(&mut self, record: CanonicalRecord) {
        self.received += 1;
        let Some(key) = IdentityKey::from_record(&record, IDENTITY_FIELD) else {
            trace!(fields = record.len(), "record has no identity");
            self.unkeyed.push(record);
            return;
        };
        match self.slots.get(&key) {
            Some(&slot) => {
                let filled = merge_fill(&mut self.keyed[slot], record);
                trace!(slot, filled, "folded duplicate record");
            }
            None => {
                self.slots.insert(key, self.keyed.len());
                self.keyed.push(record);
            }
        }
    }

    /// Number of distinct identity keys seen so far.
    pub fn identity_count(&self) -> usize {
        self.keyed.len()
    }

    /// Emits the merged dataset: keyed records first, then unkeyed records.
    pub fn finish(self) -> NormalizeOutcome {
        let Self {
            keyed,
            unkeyed,
            received,
            ..
        } = self;
        let identified = keyed.len();
        let unidentified = unkeyed.len();
        let mut normalized = keyed;
        normalized.extend(unkeyed);
        let stats = MergeStats::new(received, normalized.len());
        info!(
            original = stats.original,
            total = stats.total,
            merged = stats.merged,
            identified,
            unidentified,
            "normalization complete"
        );
        NormalizeOutcome {
            normalized,
            identity_field: IDENTITY_FIELD,
            stats,
        }
    }
}

impl Extend<CanonicalRecord> for MergeEngine {
    fn extend<I: IntoIterator<Item = CanonicalRecord>>(&mut self, iter: I) {
        for record in iter {
            self.push(record);
        }
    }
}

/// Copies non-blank incoming values into blank or missing resident fields.
///
/// Populated resident fields are never overwritten. Returns the number of
/// fields filled.
pub fn merge_fill(resident: &mut CanonicalRecord, incoming: CanonicalRecord) -> usize {
    let mut filled = 0;
    for (name, value) in incoming {
        if value.is_blank() {
            continue;
        }
        if let Some(slot) = resident.get_mut(&name) {
            if slot.is_blank() {
                *slot = value;
                filled += 1;
            }
            continue;
        }
        resident.insert(name, value);
        filled += 1;
    }
    filled
}

/// Merges canonical records given in ingestion order.
pub fn normalize(records: Vec<CanonicalRecord>) -> NormalizeOutcome {
    let mut engine = MergeEngine::new();
    engine.extend(records);
    engine.finish()
}

/// Maps raw records onto the schema, then merges them.
pub fn normalize_raw(schema: &CanonicalSchema, records: Vec<RawRecord>) -> NormalizeOutcome {
    let mapper = RowMapper::new(schema);
    let mut engine = MergeEngine::new();
    engine.extend(records.into_iter().map(|raw| mapper.map_row(raw)));
    engine.finish()
}
