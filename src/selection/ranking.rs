use std::cmp::Ordering;

use crate::document::TokenizedCollection;
use crate::index::IdfTable;
use crate::types::retrieval::{DocumentScore, RankingError, SentenceScore};

/// Score descending, then identifier ascending.
pub fn document_order(a: &DocumentScore, b: &DocumentScore) -> Ordering {
    b.score
        .partial_cmp(&a.score)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.id.cmp(&b.id))
}

/// Matching idf descending, then density descending, then text ascending.
pub fn sentence_order(a: &SentenceScore, b: &SentenceScore) -> Ordering {
    b.matching_idf
        .partial_cmp(&a.matching_idf)
        .unwrap_or(Ordering::Equal)
        .then_with(|| b.density.partial_cmp(&a.density).unwrap_or(Ordering::Equal))
        .then_with(|| a.text.cmp(&b.text))
}

/// An IDF table may only score the collection it was computed from.
pub(crate) fn check_scope<K: Ord>(
    idfs: &IdfTable,
    collection: &TokenizedCollection<K>,
) -> Result<(), RankingError> {
    if idfs.collection_size() != collection.len() {
        return Err(RankingError::ScopeMismatch {
            table: idfs.collection_size(),
            collection: collection.len(),
        });
    }
    Ok(())
}
