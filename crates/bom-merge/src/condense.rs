//! Condensed projection onto the fixed display columns.

use bom_model::{CanonicalRecord, CellValue, CondensedRecord};

/// Display columns of the condensed view, paired with the canonical field
/// each one reads.
pub const DISPLAY_COLUMNS: &[(&str, &str)] = &[
    ("Manufacturer", "Manufacturer"),
    ("MPN", "MPN"),
    ("Min / Mult (MOQ)", "Min/Mult (MOQ)"),
    ("Unit Price", "Unit Price"),
    ("Stock Status", "Stock Status"),
    ("Quantity Avail.", "Quantity Avail."),
    ("Description", "Description"),
    ("Datasheet", "Datasheet"),
    ("Product Link", "Product Link"),
];

/// Projects one record onto the display columns.
///
/// Missing and empty fields both become the empty string, so every display
/// column exports as text or a number. Fields outside the display set are
/// dropped.
pub fn condense_record(record: &CanonicalRecord) -> CondensedRecord {
    let mut condensed = CondensedRecord::with_capacity(DISPLAY_COLUMNS.len());
    for (display, canonical) in DISPLAY_COLUMNS {
        let value = match record.get(canonical) {
            None | Some(CellValue::Empty) => CellValue::text(""),
            Some(value) => value.clone(),
        };
        condensed.insert(*display, value);
    }
    condensed
}

pub fn condense(records: &[CanonicalRecord]) -> Vec<CondensedRecord> {
    records.iter().map(condense_record).collect()
}
