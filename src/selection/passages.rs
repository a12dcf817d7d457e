use crate::document::TokenizedCollection;
use crate::index::IdfTable;
use crate::selection::ranking::{check_scope, sentence_order};
use crate::types::retrieval::{Query, RankingError, SentenceScore};

/// Two-part sentence key.
///
/// `matching_idf` sums idf once per distinct query term found in the sentence.
/// `density` counts every occurrence of a query term, repeats included, over
/// the sentence length. A sentence without tokens has no density and is rejected.
pub fn score_sentence(
    query: &Query,
    text: &str,
    tokens: &[String],
    idfs: &IdfTable,
) -> Result<SentenceScore, RankingError> {
    if tokens.is_empty() {
        return Err(RankingError::EmptySentence(text.to_string()));
    }

    let mut matching_idf = 0.0;
    let mut matched_terms = Vec::new();
    for term in &query.terms {
        if tokens.iter().any(|t| t == term) {
            matching_idf += idfs.get(term)?;
            matched_terms.push(term.clone());
        }
    }

    let term_matches = tokens.iter().filter(|t| query.contains(t)).count();
    let density = term_matches as f64 / tokens.len() as f64;

    Ok(SentenceScore {
        text: text.to_string(),
        matching_idf,
        density,
        matched_terms,
        term_matches,
        total_words: tokens.len(),
    })
}

/// Every sentence of `sentences`, scored and fully sorted best first.
pub fn rank_sentences(
    query: &Query,
    sentences: &TokenizedCollection<String>,
    idfs: &IdfTable,
) -> Result<Vec<SentenceScore>, RankingError> {
    check_scope(idfs, sentences)?;

    let mut scored = sentences
        .iter()
        .map(|(text, tokens)| score_sentence(query, text, tokens, idfs))
        .collect::<Result<Vec<_>, _>>()?;

    scored.sort_by(sentence_order);

    Ok(scored)
}

/// The `n` best sentence texts for `query`, best first.
pub fn top_sentences(
    query: &Query,
    sentences: &TokenizedCollection<String>,
    idfs: &IdfTable,
    n: usize,
) -> Result<Vec<String>, RankingError> {
    Ok(rank_sentences(query, sentences, idfs)?
        .into_iter()
        .take(n)
        .map(|scored| scored.text)
        .collect())
}
