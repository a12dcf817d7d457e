pub mod documents;
pub mod passages;
pub mod ranking;

use std::collections::BTreeMap;

use tracing::debug;

use crate::config::RetrievalConfig;
use crate::corpus::Corpus;
use crate::document::TokenizedCollection;
use crate::index::IdfTable;
use crate::text::{PunctuationSegmenter, SentenceSegmenter, StopwordTokenizer, WordTokenizer};
use crate::types::identifiers::DocumentId;
use crate::types::retrieval::{
    PassageWhy, Query, RankedPassage, RetrievalError, RetrievalMetadata, RetrievalResult,
};
pub use documents::{rank_documents, score_document, top_files};
pub use passages::{rank_sentences, score_sentence, top_sentences};
pub use ranking::{document_order, sentence_order};

/// A corpus tokenized once, with its corpus-wide IDF table.
#[derive(Debug, Clone)]
pub struct IndexedCorpus<'c> {
    pub corpus: &'c Corpus,
    pub files: TokenizedCollection<DocumentId>,
    pub idfs: IdfTable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedSentence {
    pub tokens: Vec<String>,
    /// Document the text was last seen in.
    pub source: DocumentId,
}

/// Sentences of the top documents, keyed by their text.
///
/// Tokens and source live in one entry, so every sentence handed to the
/// ranker has exactly one source.
#[derive(Debug, Clone, Default)]
pub struct ExtractedSentences {
    entries: BTreeMap<String, ExtractedSentence>,
}

impl ExtractedSentences {
    /// Insert or replace the entry for `text`.
    pub fn insert(&mut self, text: String, tokens: Vec<String>, source: DocumentId) {
        self.entries.insert(text, ExtractedSentence { tokens, source });
    }

    pub fn get(&self, text: &str) -> Option<&ExtractedSentence> {
        self.entries.get(text)
    }

    pub fn source(&self, text: &str) -> Option<&DocumentId> {
        self.entries.get(text).map(|entry| &entry.source)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ExtractedSentence)> {
        self.entries.iter()
    }

    /// Text → tokens view for IDF and ranking.
    pub fn collection(&self) -> TokenizedCollection<String> {
        self.entries
            .iter()
            .map(|(text, entry)| (text.clone(), entry.tokens.clone()))
            .collect()
    }
}

pub struct PassageRetriever<T, S> {
    tokenizer: T,
    segmenter: S,
    config: RetrievalConfig,
}

impl Default for PassageRetriever<StopwordTokenizer, PunctuationSegmenter> {
    fn default() -> Self {
        Self {
            tokenizer: StopwordTokenizer::english(),
            segmenter: PunctuationSegmenter::default(),
            config: RetrievalConfig::v0(),
        }
    }
}

impl<T, S> PassageRetriever<T, S>
where
    T: WordTokenizer,
    S: SentenceSegmenter,
{
    pub fn new(tokenizer: T, segmenter: S, config: RetrievalConfig) -> Self {
        Self {
            tokenizer,
            segmenter,
            config,
        }
    }

    pub fn with_config(mut self, config: RetrievalConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &RetrievalConfig {
        &self.config
    }

    pub fn tokenizer(&self) -> &T {
        &self.tokenizer
    }

    pub fn query(&self, raw: &str) -> Query {
        Query::new(raw, &self.tokenizer)
    }

    /// Tokenize every document and compute the corpus-wide IDF table.
    pub fn index<'c>(&self, corpus: &'c Corpus) -> IndexedCorpus<'c> {
        let files: TokenizedCollection<DocumentId> = corpus
            .documents()
            .iter()
            .map(|doc| (doc.id.clone(), self.tokenizer.tokenize(&doc.content)))
            .collect();
        let idfs = IdfTable::compute(&files);

        debug!(documents = files.len(), words = idfs.len(), "indexed corpus");

        IndexedCorpus {
            corpus,
            files,
            idfs,
        }
    }

    /// Split each document into lines, then sentences; keep sentences with at
    /// least one token. A repeated sentence text replaces the earlier entry.
    pub fn extract_sentences(&self, corpus: &Corpus, ids: &[DocumentId]) -> ExtractedSentences {
        let mut extracted = ExtractedSentences::default();

        for doc in ids.iter().filter_map(|id| corpus.get(id)) {
            for passage in doc.passages() {
                for sentence in self.segmenter.split(passage) {
                    let tokens = self.tokenizer.tokenize(&sentence);
                    if tokens.is_empty() {
                        continue;
                    }
                    extracted.insert(sentence, tokens, doc.id.clone());
                }
            }
        }

        extracted
    }

    /// Answer one query against an already indexed corpus.
    pub fn answer(
        &self,
        indexed: &IndexedCorpus<'_>,
        raw_query: &str,
    ) -> Result<RetrievalResult, RetrievalError> {
        let query = self.query(raw_query);

        // 1. Document stage, corpus-wide table
        let filenames = top_files(
            &query,
            &indexed.files,
            &indexed.idfs,
            self.config.file_matches,
        )
        .map_err(RetrievalError::Documents)?;
        debug!(selected = ?filenames, "ranked documents");

        // 2. Passage stage, table local to the extracted sentences
        let extracted = self.extract_sentences(indexed.corpus, &filenames);
        let sentences = extracted.collection();
        let idfs = IdfTable::compute(&sentences);
        let ranked = rank_sentences(&query, &sentences, &idfs).map_err(RetrievalError::Passages)?;
        debug!(sentences = sentences.len(), "ranked sentences");

        let passages = ranked
            .into_iter()
            .take(self.config.sentence_matches)
            .map(|scored| {
                let source = extracted
                    .source(&scored.text)
                    .ok_or_else(|| RetrievalError::UnattributedSentence(scored.text.clone()))?;
                Ok(RankedPassage {
                    source: source.as_str().to_string(),
                    matching_idf: scored.matching_idf,
                    density: scored.density,
                    why: PassageWhy {
                        matched_terms: scored.matched_terms,
                        term_matches: scored.term_matches,
                        total_words: scored.total_words,
                    },
                    text: scored.text,
                })
            })
            .collect::<Result<Vec<RankedPassage>, RetrievalError>>()?;

        let metadata = RetrievalMetadata {
            query: query.raw,
            query_terms: query.terms.into_iter().collect(),
            corpus_version: indexed.corpus.version().to_string(),
            documents_considered: indexed.files.len(),
            documents_selected: filenames.iter().map(|id| id.as_str().to_string()).collect(),
            sentences_considered: sentences.len(),
            sentences_selected: passages.len(),
        };

        Ok(RetrievalResult {
            passages,
            retrieval: metadata,
        })
    }

    /// Index `corpus` and answer `raw_query` in one pass.
    pub fn retrieve(
        &self,
        corpus: &Corpus,
        raw_query: &str,
    ) -> Result<RetrievalResult, RetrievalError> {
        let indexed = self.index(corpus);
        self.answer(&indexed, raw_query)
    }
}
