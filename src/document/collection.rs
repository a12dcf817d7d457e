use std::collections::btree_map;
use std::collections::BTreeMap;

/// Identifier → token sequence.
///
/// One entry per identifier; inserting an existing identifier replaces its
/// tokens. Iteration is in ascending identifier order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizedCollection<K: Ord> {
    entries: BTreeMap<K, Vec<String>>,
}

impl<K: Ord> Default for TokenizedCollection<K> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<K: Ord> TokenizedCollection<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the tokens previously stored under `key`, if any.
    pub fn insert(&mut self, key: K, tokens: Vec<String>) -> Option<Vec<String>> {
        self.entries.insert(key, tokens)
    }

    pub fn get(&self, key: &K) -> Option<&[String]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &[String])> {
        self.entries.iter().map(|(k, v)| (k, v.as_slice()))
    }

    pub fn token_lists(&self) -> impl Iterator<Item = &[String]> {
        self.entries.values().map(Vec::as_slice)
    }
}

impl<K: Ord> FromIterator<(K, Vec<String>)> for TokenizedCollection<K> {
    fn from_iter<I: IntoIterator<Item = (K, Vec<String>)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<K: Ord> IntoIterator for TokenizedCollection<K> {
    type Item = (K, Vec<String>);
    type IntoIter = btree_map::IntoIter<K, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
