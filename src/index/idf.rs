use std::collections::{BTreeMap, HashSet};

use thiserror::Error;

use crate::document::TokenizedCollection;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdfLookupError {
    #[error("Word {0:?} does not occur in the collection this IDF table was built from")]
    UnknownWord(String),
}

/// Inverse document frequencies of one collection.
///
/// `idf(word) = ln(N / df(word))`, where `N` counts every document (empty
/// ones included) and `df` counts documents containing the word at least
/// once. Every word of the collection has exactly one entry and nothing else
/// does, so all values are finite and non-negative.
#[derive(Debug, Clone, PartialEq)]
pub struct IdfTable {
    collection_size: usize,
    idfs: BTreeMap<String, f64>,
}

impl IdfTable {
    pub fn compute<K: Ord>(collection: &TokenizedCollection<K>) -> Self {
        Self::from_token_lists(collection.token_lists())
    }

    pub fn from_token_lists<'a, I>(documents: I) -> Self
    where
        I: IntoIterator<Item = &'a [String]>,
    {
        let mut collection_size = 0usize;
        let mut document_frequency: BTreeMap<&'a str, usize> = BTreeMap::new();

        for tokens in documents {
            collection_size += 1;

            // Presence, not frequency
            let distinct: HashSet<&str> = tokens.iter().map(String::as_str).collect();
            for word in distinct {
                *document_frequency.entry(word).or_insert(0) += 1;
            }
        }

        let n = collection_size as f64;
        let idfs = document_frequency
            .into_iter()
            .map(|(word, df)| (word.to_string(), (n / df as f64).ln()))
            .collect();

        Self {
            collection_size,
            idfs,
        }
    }

    pub fn get(&self, word: &str) -> Result<f64, IdfLookupError> {
        self.idfs
            .get(word)
            .copied()
            .ok_or_else(|| IdfLookupError::UnknownWord(word.to_string()))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.idfs.contains_key(word)
    }

    /// Number of documents of the collection the table was computed from.
    pub fn collection_size(&self) -> usize {
        self.collection_size
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.idfs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.idfs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.idfs.iter().map(|(w, v)| (w.as_str(), *v))
    }
}
