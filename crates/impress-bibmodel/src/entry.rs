//! BibTeX entry data structures

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::value::StringValue;

/// A BibTeX record: type tag, cite key, and named field values
///
/// Fields keep the order they were first set in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "EntryRecord", into = "EntryRecord")]
pub struct Entry {
    entry_type: String,
    cite_key: String,
    fields: IndexMap<String, StringValue>,
}

impl Entry {
    /// Create an entry with no fields
    ///
    /// The type tag is lowercased and the type and key lose all whitespace.
    /// Nothing is validated; empty strings are kept as they are.
    pub fn new(entry_type: &str, cite_key: &str) -> Self {
        Self {
            entry_type: strip_whitespace(entry_type).to_lowercase(),
            cite_key: strip_whitespace(cite_key),
            fields: IndexMap::new(),
        }
    }

    /// Set a field, replacing any earlier value under the same (trimmed) name
    pub fn set_field(&mut self, name: &str, value: StringValue) {
        self.fields.insert(name.trim().to_string(), value);
    }

    /// Builder-style [`Entry::set_field`]
    pub fn with_field(mut self, name: &str, value: StringValue) -> Self {
        self.set_field(name, value);
        self
    }

    pub fn entry_type(&self) -> &str {
        &self.entry_type
    }

    pub fn cite_key(&self) -> &str {
        &self.cite_key
    }

    /// Get a field value by name
    pub fn field(&self, name: &str) -> Option<&StringValue> {
        self.fields.get(name.trim())
    }

    /// Fields in insertion order
    pub fn fields(&self) -> impl Iterator<Item = (&str, &StringValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Length in characters of the longest field name
    pub(crate) fn longest_field_name(&self) -> usize {
        self.fields
            .keys()
            .map(|name| name.chars().count())
            .max()
            .unwrap_or(0)
    }
}

fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Serialized form of an [`Entry`]; deserializing normalizes through [`Entry::new`]
#[derive(Serialize, Deserialize)]
struct EntryRecord {
    entry_type: String,
    cite_key: String,
    #[serde(default)]
    fields: IndexMap<String, StringValue>,
}

impl From<EntryRecord> for Entry {
    fn from(record: EntryRecord) -> Self {
        let mut entry = Entry::new(&record.entry_type, &record.cite_key);
        for (name, value) in record.fields {
            entry.set_field(&name, value);
        }
        entry
    }
}

impl From<Entry> for EntryRecord {
    fn from(entry: Entry) -> Self {
        Self {
            entry_type: entry.entry_type,
            cite_key: entry.cite_key,
            fields: entry.fields,
        }
    }
}
