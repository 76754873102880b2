//! Raw header to canonical field resolution.

use bom_model::CanonicalSchema;

/// Normalizes a header for comparison: trims surrounding whitespace and
/// lowercases.
///
/// Interior whitespace and punctuation are significant.
pub fn normalize_header(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Resolves one raw header against the schema without precomputation.
///
/// Returns the canonical field name, or the raw header unchanged when no
/// alias matches.
pub fn canonicalize(schema: &CanonicalSchema, header: &str) -> String {
    let needle = normalize_header(header);
    for field in &schema.fields {
        if field
            .aliases
            .iter()
            .any(|alias| normalize_header(alias) == needle)
        {
            return field.name.clone();
        }
    }
    header.to_string()
}

/// Outcome of resolving one header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderResolution<'a> {
    /// The header is an alias of this canonical field.
    Canonical(&'a str),
    /// No alias matched; the header is kept verbatim.
    Passthrough,
}

/// Canonicalizer with the alias table normalized once up front.
///
/// Entries are flattened in schema order, then alias order, so a linear scan
/// preserves first-match priority.
#[derive(Debug, Clone)]
pub struct HeaderCanonicalizer<'a> {
    entries: Vec<(String, &'a str)>,
}

impl<'a> HeaderCanonicalizer<'a> {
    pub fn new(schema: &'a CanonicalSchema) -> Self {
        let entries = schema
            .fields
            .iter()
            .flat_map(|field| {
                field
                    .aliases
                    .iter()
                    .map(move |alias| (normalize_header(alias), field.name.as_str()))
            })
            .collect();
        Self { entries }
    }

    pub fn resolve(&self, header: &str) -> HeaderResolution<'a> {
        let needle = normalize_header(header);
        self.entries
            .iter()
            .find(|(alias, _)| *alias == needle)
            .map_or(HeaderResolution::Passthrough, |(_, name)| {
                HeaderResolution::Canonical(*name)
            })
    }

    /// Returns the canonical name for `header`, or `header` itself.
    pub fn canonicalize(&self, header: &str) -> String {
        match self.resolve(header) {
            HeaderResolution::Canonical(name) => name.to_string(),
            HeaderResolution::Passthrough => header.to_string(),
        }
    }
}
