//! Insertion-ordered map used for grouped counts and usage reports.
//!
//! Entries are stored as a vector of key/value pairs with an fnv index for
//! lookups. Iteration and serialization always follow first-insertion order.

use fnv::FnvHashMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

#[derive(Debug, Clone)]
pub struct OrderedMap<V> {
    entries: Vec<(String, V)>,
    index: FnvHashMap<String, usize>,
}

/// Key to occurrence count, in first-seen order.
pub type GroupCounts = OrderedMap<usize>;

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: FnvHashMap::default(),
        }
    }
}

impl<V> OrderedMap<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.index.get(key).map(|&slot| &self.entries[slot].1)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Inserts or replaces a value. Replacing keeps the original position.
    pub fn insert(&mut self, key: impl Into<String>, value: V) {
        let key = key.into();
        if let Some(&slot) = self.index.get(&key) {
            self.entries[slot].1 = value;
            return;
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, value));
    }

    /// Returns a mutable slot for `key`, inserting `default()` on first sight.
    pub fn entry_or_insert_with(&mut self, key: &str, default: impl FnOnce() -> V) -> &mut V {
        let slot = match self.index.get(key) {
            Some(&slot) => slot,
            None => {
                let slot = self.entries.len();
                self.index.insert(key.to_string(), slot);
                self.entries.push((key.to_string(), default()));
                slot
            }
        };
        &mut self.entries[slot].1
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Keeps only entries for which `keep` returns true, preserving order.
    pub fn retain(&mut self, mut keep: impl FnMut(&str, &V) -> bool) {
        self.entries.retain(|(key, value)| keep(key, value));
        self.index = self
            .entries
            .iter()
            .enumerate()
            .map(|(slot, (key, _))| (key.clone(), slot))
            .collect();
    }
}

impl OrderedMap<usize> {
    /// Increments the counter for `key`.
    pub fn increment(&mut self, key: &str) {
        *self.entry_or_insert_with(key, || 0) += 1;
    }
}

impl<V: PartialEq> PartialEq for OrderedMap<V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<V> FromIterator<(String, V)> for OrderedMap<V> {
    fn from_iter<I: IntoIterator<Item = (String, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl<V: Serialize> Serialize for OrderedMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Counts occurrences of `key_fn` over `items`, keyed in first-seen order.
pub fn group_by<T, K, F>(items: impl IntoIterator<Item = T>, mut key_fn: F) -> GroupCounts
where
    F: FnMut(&T) -> K,
    K: AsRef<str>,
{
    let mut counts = GroupCounts::new();
    for item in items {
        let key = key_fn(&item);
        counts.increment(key.as_ref());
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_by_keeps_first_seen_order() {
        let counts = group_by(["b", "a", "b", "c", "a", "b"], |item| item.to_string());
        let pairs = counts.iter().map(|(k, v)| (k.to_string(), *v)).collect::<Vec<_>>();
        assert_eq!(
            pairs,
            vec![
                ("b".to_string(), 3),
                ("a".to_string(), 2),
                ("c".to_string(), 1)
            ]
        );
    }

    #[test]
    fn serializes_in_insertion_order() {
        let mut counts = GroupCounts::new();
        counts.increment("zeta");
        counts.increment("alpha");
        let json = serde_json::to_string(&counts).expect("serialize");
        assert_eq!(json, r#"{"zeta":1,"alpha":1}"#);
    }

    #[test]
    fn retain_rebuilds_index() {
        let mut map: OrderedMap<u32> = [("a", 1), ("b", 2), ("c", 3)]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();
        map.retain(|key, _| key != "a");
        assert_eq!(map.get("c"), Some(&3));
        assert!(!map.contains_key("a"));
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["b", "c"]);
    }

    #[test]
    fn insert_replaces_in_place() {
        let mut map = OrderedMap::new();
        map.insert("x", 1);
        map.insert("y", 2);
        map.insert("x", 9);
        assert_eq!(map.iter().map(|(_, v)| *v).collect::<Vec<_>>(), vec![9, 2]);
    }
}
