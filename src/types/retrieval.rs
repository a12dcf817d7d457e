use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::index::IdfLookupError;
use crate::text::WordTokenizer;
use crate::types::identifiers::DocumentId;

/// A normalized query.
/// Normalization rules:
/// - Same tokenizer as the corpus (lowercase, no punctuation, no stopwords)
/// - Terms form a set: order is irrelevant, duplicates collapse
/// - An empty term set is valid and scores everything 0.0
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub raw: String,
    pub terms: BTreeSet<String>,
}

impl Query {
    pub fn new<T: WordTokenizer + ?Sized>(raw: impl Into<String>, tokenizer: &T) -> Self {
        let raw = raw.into();
        let terms = tokenizer.tokenize(&raw).into_iter().collect();

        Self { raw, terms }
    }

    /// Build a query from terms that are already normalized.
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let terms: BTreeSet<String> = terms.into_iter().map(Into::into).collect();
        let raw = terms.iter().cloned().collect::<Vec<_>>().join(" ");

        Self { raw, terms }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.terms.contains(word)
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// Score record for one document of the document-level pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentScore {
    pub id: DocumentId,
    /// Sum of idf over every token occurrence that is a query term.
    pub score: f64,
    pub term_matches: usize,
    pub total_words: usize,
}

/// Score record for one sentence of the passage-level pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentenceScore {
    pub text: String,
    /// Sum of idf over the distinct query terms present in the sentence.
    pub matching_idf: f64,
    /// Query-term occurrences divided by sentence length.
    pub density: f64,
    pub matched_terms: Vec<String>,
    pub term_matches: usize,
    pub total_words: usize,
}

/// A selected passage returned in the output.
/// Fully self-contained and serializable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedPassage {
    pub text: String,
    pub source: String,

    pub matching_idf: f64,
    pub density: f64,

    pub why: PassageWhy,
}

/// Explanation for why a passage received its score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PassageWhy {
    pub matched_terms: Vec<String>,
    pub term_matches: usize,
    pub total_words: usize,
}

/// Metadata describing one pass through the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalMetadata {
    pub query: String,
    pub query_terms: Vec<String>,
    pub corpus_version: String,

    pub documents_considered: usize,
    pub documents_selected: Vec<String>,

    pub sentences_considered: usize,
    pub sentences_selected: usize,
}

/// The final result of a retrieval.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalResult {
    pub passages: Vec<RankedPassage>,
    pub retrieval: RetrievalMetadata,
}

#[derive(Debug, thiserror::Error)]
pub enum RankingError {
    #[error(transparent)]
    Lookup(#[from] IdfLookupError),

    #[error("IDF table covers {table} entries but the collection has {collection}")]
    ScopeMismatch { table: usize, collection: usize },

    #[error("Sentence has no tokens: {0:?}")]
    EmptySentence(String),
}

#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("Document ranking failed: {0}")]
    Documents(#[source] RankingError),

    #[error("Passage ranking failed: {0}")]
    Passages(#[source] RankingError),

    #[error("Ranked sentence has no source document: {0:?}")]
    UnattributedSentence(String),
}
