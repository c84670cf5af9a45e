use serde_json::{Map as JsonMap, Value as JsonValue};

/// Name-keyed parameter metadata that also remembers authoring order.
///
/// The order matters: a missing ABI input at position `j` is matched with
/// the key at position `j` when suggesting a correction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InnerParameters {
    entries: Vec<(String, JsonValue)>,
}

impl InnerParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry. A repeated name keeps its first position and takes
    /// the new value, the same way a JSON object does.
    pub fn insert(&mut self, name: impl Into<String>, value: JsonValue) {
        let name = name.into();
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(key, _)| key == name)
    }

    /// Key at insertion-order position `index`
    pub fn key_at(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|(key, _)| key.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// Requires serde_json's `preserve_order` so the map iterates in source order.
impl From<&JsonMap<String, JsonValue>> for InnerParameters {
    fn from(map: &JsonMap<String, JsonValue>) -> Self {
        let mut params = Self::new();
        for (name, value) in map {
            params.insert(name.clone(), value.clone());
        }
        params
    }
}

impl<K: Into<String>> FromIterator<(K, JsonValue)> for InnerParameters {
    fn from_iter<I: IntoIterator<Item = (K, JsonValue)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (name, value) in iter {
            params.insert(name, value);
        }
        params
    }
}
