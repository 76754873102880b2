//! Raw record to canonical record mapping.

use bom_model::{CanonicalRecord, CanonicalSchema, RawRecord};
use tracing::debug;

use crate::canonical::HeaderCanonicalizer;

/// Applies the header canonicalizer to every field of a raw record.
#[derive(Debug, Clone)]
pub struct RowMapper<'a> {
    canonicalizer: HeaderCanonicalizer<'a>,
}

impl<'a> RowMapper<'a> {
    pub fn new(schema: &'a CanonicalSchema) -> Self {
        Self {
            canonicalizer: HeaderCanonicalizer::new(schema),
        }
    }

    pub fn canonicalizer(&self) -> &HeaderCanonicalizer<'a> {
        &self.canonicalizer
    }

    /// Maps one raw record.
    ///
    /// When two raw headers of the same record resolve to one canonical
    /// field, the later header's value replaces the earlier one.
    pub fn map_row(&self, raw: RawRecord) -> CanonicalRecord {
        let mut mapped = CanonicalRecord::with_capacity(raw.len());
        for (header, value) in raw {
            let field = self.canonicalizer.canonicalize(&header);
            if mapped.insert(field.as_str(), value).is_some() {
                debug!(header = %header, field = %field, "header collision, later column kept");
            }
        }
        mapped
    }

    pub fn map_rows<I>(&self, rows: I) -> Vec<CanonicalRecord>
    where
        I: IntoIterator<Item = RawRecord>,
    {
        rows.into_iter().map(|raw| self.map_row(raw)).collect()
    }
}

#[cfg(test)]
mod tests {
    use bom_model::CellValue;

    use super::*;

    #[test]
    fn maps_known_and_passthrough_headers() {
        let schema = CanonicalSchema::default();
        let mapper = RowMapper::new(&schema);
        let raw: RawRecord = [
            ("Mfr Part #", "LM358N"),
            ("Mfr", "TI"),
            ("RoHS", "Yes"),
        ]
        .into_iter()
        .collect();

        let mapped = mapper.map_row(raw);
        assert_eq!(
            mapped.names().collect::<Vec<_>>(),
            vec!["MPN", "Manufacturer", "RoHS"]
        );
        assert_eq!(mapped.get("MPN"), Some(&CellValue::text("LM358N")));
        assert_eq!(mapped.get("RoHS"), Some(&CellValue::text("Yes")));
    }

    #[test]
    fn later_header_wins_on_collision() {
        let schema = CanonicalSchema::default();
        let mapper = RowMapper::new(&schema);
        let raw: RawRecord = [("Price", "1.00"), ("Unit Price", "0.90")]
            .into_iter()
            .collect();

        let mapped = mapper.map_row(raw);
        assert_eq!(mapped.len(), 1);
        assert_eq!(mapped.get("Unit Price"), Some(&CellValue::text("0.90")));
    }

    #[test]
    fn later_blank_header_still_wins_on_collision() {
        let schema = CanonicalSchema::default();
        let mapper = RowMapper::new(&schema);
        let raw: RawRecord = [
            ("Price", CellValue::text("1.00")),
            ("Unit Price", CellValue::Empty),
        ]
        .into_iter()
        .collect();

        let mapped = mapper.map_row(raw);
        assert_eq!(mapped.get("Unit Price"), Some(&CellValue::Empty));
    }

    #[test]
    fn empty_record_maps_to_empty_record() {
        let schema = CanonicalSchema::default();
        let mapper = RowMapper::new(&schema);
        assert!(mapper.map_row(RawRecord::new()).is_empty());
    }

    #[test]
    fn values_are_not_coerced() {
        let schema = CanonicalSchema::default();
        let mapper = RowMapper::new(&schema);
        let raw: RawRecord = [("Qty", CellValue::Number(10.0)), ("Price", CellValue::text("010"))]
            .into_iter()
            .collect();

        let mapped = mapper.map_row(raw);
        assert_eq!(mapped.get("Required Qty"), Some(&CellValue::Number(10.0)));
        assert_eq!(mapped.get("Unit Price"), Some(&CellValue::text("010")));
    }
}
