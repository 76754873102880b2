//! Canonical schema and the header alias table.
//!
//! The alias table is plain data: an ordered list of canonical fields, each
//! with an ordered list of raw header spellings seen in distributor and
//! BOM-tool exports. Field order and alias order decide which field wins when
//! a header matches more than one entry, so both are preserved exactly as
//! declared.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Canonical field whose value identifies a part across sources.
pub const IDENTITY_FIELD: &str = "MPN";

/// Built-in alias table, in priority order.
pub const DEFAULT_ALIASES: &[(&str, &[&str])] = &[
    (
        "MPN",
        &[
            "MPN",
            "Manufacturer Part Number",
            "Mfr Part Number",
            "Mfr. Part Number",
            "Mfr Part #",
            "Mfr. Part #",
            "Mfr. #",
            "Manufacturer Part No",
            "Manufacturer Part No.",
            "Part Number",
            "Part #",
        ],
    ),
    (
        "Manufacturer",
        &[
            "Manufacturer",
            "Manufacturer Name",
            "Mfr",
            "Mfr.",
            "Mfg",
            "Mfg.",
            "Brand",
        ],
    ),
    (
        "Description",
        &[
            "Description",
            "Product Description",
            "Part Description",
            "Desc",
            "Desc.",
        ],
    ),
    (
        "Required Qty",
        &[
            "Required Qty",
            "Required Quantity",
            "Quantity Required",
            "Customer Qty",
            "Order Qty",
            "Qty",
            "Quantity",
        ],
    ),
    (
        "Unit Price",
        &[
            "Unit Price",
            "Unit Price (USD)",
            "Price",
            "Price (USD)",
            "Unit Cost",
        ],
    ),
    (
        "Total Price",
        &[
            "Total Price",
            "Total Price (USD)",
            "Extended Price",
            "Ext. Price",
            "Ext Price",
            "Total",
        ],
    ),
    (
        "Stock Status",
        &["Stock Status", "Availability", "Status", "Stock"],
    ),
    (
        "Quantity Avail.",
        &[
            "Quantity Avail.",
            "Quantity Available",
            "Qty Available",
            "Qty Avail.",
            "Available Qty",
            "In Stock",
            "Stock Qty",
        ],
    ),
    (
        "Lead Time",
        &[
            "Lead Time",
            "Factory Lead Time",
            "Manufacturer Lead Time",
            "Lead-Time",
        ],
    ),
    (
        "Min/Mult (MOQ)",
        &[
            "Min/Mult (MOQ)",
            "Min / Mult (MOQ)",
            "Min/Mult",
            "MOQ",
            "Minimum Order Quantity",
            "Min Order Qty",
            "Min Qty",
        ],
    ),
    ("Datasheet", &["Datasheet", "Datasheet URL", "Data Sheet"]),
    (
        "Product Link",
        &[
            "Product Link",
            "Product URL",
            "Product Page",
            "URL",
            "Link",
        ],
    ),
];

/// One canonical field and the raw header spellings that refer to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalField {
    pub name: String,
    #[serde(default)]
    pub aliases: Vec<String>,
}

/// Ordered set of canonical fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalSchema {
    pub fields: Vec<CanonicalField>,
}

impl Default for CanonicalSchema {
    fn default() -> Self {
        Self::from_static(DEFAULT_ALIASES)
    }
}

impl CanonicalSchema {
    /// Builds a schema from a static alias table.
    pub fn from_static(table: &[(&str, &[&str])]) -> Self {
        let fields = table
            .iter()
            .map(|(name, aliases)| CanonicalField {
                name: (*name).to_string(),
                aliases: aliases.iter().map(|alias| (*alias).to_string()).collect(),
            })
            .collect();
        Self { fields }
    }

    /// Parses a schema from JSON and validates it.
    ///
    /// Expected shape: `{"fields": [{"name": "MPN", "aliases": ["Part #"]}]}`.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let schema: Self = serde_json::from_str(json)?;
        schema.validate()?;
        Ok(schema)
    }

    /// Loads a schema from a JSON alias file.
    pub fn from_json_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| ModelError::AliasRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    /// Checks that every field is named and the identity field is present.
    pub fn validate(&self) -> Result<()> {
        if let Some(idx) = self.fields.iter().position(|f| f.name.trim().is_empty()) {
            return Err(ModelError::InvalidSchema {
                reason: format!("field at position {idx} has an empty name"),
            });
        }
        if !self.contains(IDENTITY_FIELD) {
            return Err(ModelError::MissingIdentityField {
                field: IDENTITY_FIELD.to_string(),
            });
        }
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.iter().any(|field| field.name == name)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|field| field.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_schema_field_order() {
        let schema = CanonicalSchema::default();
        let names: Vec<&str> = schema.field_names().collect();
        assert_eq!(
            names,
            vec![
                "MPN",
                "Manufacturer",
                "Description",
                "Required Qty",
                "Unit Price",
                "Total Price",
                "Stock Status",
                "Quantity Avail.",
                "Lead Time",
                "Min/Mult (MOQ)",
                "Datasheet",
                "Product Link",
            ]
        );
        assert!(schema.validate().is_ok());
    }

    #[test]
    fn every_field_lists_itself_first() {
        for field in &CanonicalSchema::default().fields {
            assert_eq!(field.aliases.first(), Some(&field.name));
        }
    }

    #[test]
    fn parses_json_alias_table() {
        let schema = CanonicalSchema::from_json_str(
            r#"{"fields": [{"name": "MPN", "aliases": ["Part #"]}, {"name": "Notes"}]}"#,
        )
        .expect("parse schema");
        assert_eq!(schema.fields.len(), 2);
        assert_eq!(schema.fields[0].aliases, vec!["Part #"]);
        assert!(schema.fields[1].aliases.is_empty());
    }

    #[test]
    fn rejects_schema_without_identity_field() {
        let err = CanonicalSchema::from_json_str(r#"{"fields": [{"name": "Manufacturer"}]}"#)
            .unwrap_err();
        assert!(matches!(err, ModelError::MissingIdentityField { .. }));
    }

    #[test]
    fn rejects_blank_field_name() {
        let err = CanonicalSchema::from_json_str(r#"{"fields": [{"name": "MPN"}, {"name": " "}]}"#)
            .unwrap_err();
        assert!(matches!(err, ModelError::InvalidSchema { .. }));
    }
}
