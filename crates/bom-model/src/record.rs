//! Ordered field/value records.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::value::CellValue;

/// A single row keyed by field name.
///
/// Fields keep their first-insertion order so exported columns follow the
/// source layout. Records are narrow (tens of columns), so lookups scan the
/// field list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Vec<(String, CellValue)>,
}

/// A row as it appears in a source file, keyed by the raw header string.
pub type RawRecord = Record;

/// A row keyed by canonical field names (or passthrough headers).
pub type CanonicalRecord = Record;

/// A row restricted to the fixed display columns of the condensed view.
pub type CondensedRecord = Record;

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&CellValue> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut CellValue> {
        self.fields
            .iter_mut()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Sets a field, returning the previous value if the field existed.
    ///
    /// An overwritten field keeps its original position.
    pub fn insert(&mut self, name: impl Into<String>, value: CellValue) -> Option<CellValue> {
        let name = name.into();
        if let Some(idx) = self.fields.iter().position(|(field, _)| *field == name) {
            return Some(std::mem::replace(&mut self.fields[idx].1, value));
        }
        self.fields.push((name, value));
        None
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl IntoIterator for Record {
    type Item = (String, CellValue);
    type IntoIter = std::vec::IntoIter<(String, CellValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<CellValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (name, value) in iter {
            record.insert(name, value.into());
        }
        record
    }
}

impl Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
