//! Edge headers mapping.
//!
//! Edge runtimes hand header sets to functions as an object keyed by the
//! lowercase header name, each value wrapped in `{ "value": "..." }`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single header value as the edge runtime represents it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct HeaderEntry {
    pub value: String,

    /// Any other keys the runtime attached (`multiValue`, ...), kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl HeaderEntry {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            extra: Map::new(),
        }
    }
}

/// Lowercase header name → value object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct HeaderMapping(BTreeMap<String, HeaderEntry>);

impl HeaderMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the value stored under `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(|entry| entry.value.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Set `name` to a fresh `{ "value": .. }` entry, replacing any previous one.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), HeaderEntry::new(value));
    }

    /// Delete `name` entirely. Returns the removed entry, if any.
    pub fn remove(&mut self, name: &str) -> Option<HeaderEntry> {
        self.0.remove(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for HeaderMapping
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut mapping = Self::new();
        for (name, value) in iter {
            mapping.insert(name, value);
        }
        mapping
    }
}
