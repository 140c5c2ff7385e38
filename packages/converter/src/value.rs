//! Converted structure produced by folding an element tree.
//!
//! Keys are `Option<String>`: an element without a display name still
//! produces a key, it is just absent. When serialized as an object key an
//! absent key is written as the string `"null"`, so a record holding both an
//! absent key and a literal `"null"` key renders that object key twice. JSON
//! readers usually keep the last one; [`Record::get_key`] keeps them apart.

use indexmap::IndexMap;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

/// Key of a record entry. `None` when the source element had no display name.
pub type Key = Option<String>;

/// A folded value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Element text, or null when the element had none.
    Text(Option<String>),
    /// Mapping from key to value, in insertion order.
    Record(Record),
    /// Repeated-tag collection of `{name, data}` pairs, in document order.
    List(Vec<Entry>),
}

impl Value {
    /// Build a text value.
    #[must_use]
    pub fn text(text: Option<&str>) -> Self {
        Self::Text(text.map(str::to_owned))
    }

    /// Text content, if this is a non-null text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => text.as_deref(),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Self::Record(record) => Some(record),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&[Entry]> {
        match self {
            Self::List(entries) => Some(entries),
            _ => None,
        }
    }
}

/// A single key/value pair: the result of folding one element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: Key,
    pub value: Value,
}

impl Entry {
    #[must_use]
    pub fn new(key: Key, value: Value) -> Self {
        Self { key, value }
    }

    /// Key as a string slice, `None` if absent.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }
}

/// Insertion-ordered mapping.
///
/// Inserting a key that already exists replaces its value but keeps the
/// position of the first insertion. Equality is order-sensitive.
#[derive(Debug, Clone, Default)]
pub struct Record {
    entries: IndexMap<Key, Value>,
}

impl Record {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, returning the previous value for the key.
    pub fn insert(&mut self, key: Key, value: Value) -> Option<Value> {
        self.entries.insert(key, value)
    }

    /// Look up a present key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(&Some(key.to_string()))
    }

    /// Look up a key that may be absent.
    #[must_use]
    pub fn get_key(&self, key: Option<&str>) -> Option<&Value> {
        match key {
            Some(key) => self.get(key),
            None => self.entries.get(&None),
        }
    }

    #[must_use]
    pub fn contains_key(&self, key: Option<&str>) -> bool {
        self.get_key(key).is_some()
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = Option<&str>> {
        self.entries.keys().map(Option::as_deref)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Option<&str>, &Value)> {
        self.entries.iter().map(|(key, value)| (key.as_deref(), value))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.entries.iter().eq(other.entries.iter())
    }
}

impl Eq for Record {}

impl FromIterator<Entry> for Record {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        let mut record = Self::new();
        for entry in iter {
            record.insert(entry.key, entry.value);
        }
        record
    }
}

impl IntoIterator for Record {
    type Item = Entry;
    type IntoIter = std::iter::Map<indexmap::map::IntoIter<Key, Value>, fn((Key, Value)) -> Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries
            .into_iter()
            .map((|(key, value)| Entry::new(key, value)) as fn((Key, Value)) -> Entry)
    }
}

fn map_key(key: &Key) -> &str {
    key.as_deref().unwrap_or("null")
}

/// List item representation for serialization.
#[derive(Serialize)]
struct NamedData<'a> {
    name: &'a Key,
    data: &'a Value,
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Text(text) => text.serialize(serializer),
            Self::Record(record) => record.serialize(serializer),
            Self::List(entries) => {
                let mut seq = serializer.serialize_seq(Some(entries.len()))?;
                for entry in entries {
                    seq.serialize_element(&NamedData {
                        name: &entry.key,
                        data: &entry.value,
                    })?;
                }
                seq.end()
            }
        }
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(map_key(key), value)?;
        }
        map.end()
    }
}

impl Serialize for Entry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(map_key(&self.key), &self.value)?;
        map.end()
    }
}
