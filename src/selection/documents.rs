use crate::document::TokenizedCollection;
use crate::index::IdfTable;
use crate::selection::ranking::{check_scope, document_order};
use crate::types::identifiers::DocumentId;
use crate::types::retrieval::{DocumentScore, Query, RankingError};

/// Term-frequency-weighted IDF: every token occurrence that is a query term
/// adds that term's idf, so `k` occurrences contribute `k * idf`.
pub fn score_document(
    query: &Query,
    id: &DocumentId,
    tokens: &[String],
    idfs: &IdfTable,
) -> Result<DocumentScore, RankingError> {
    let mut score = 0.0;
    let mut term_matches = 0;

    for token in tokens.iter().filter(|t| query.contains(t)) {
        score += idfs.get(token)?;
        term_matches += 1;
    }

    Ok(DocumentScore {
        id: id.clone(),
        score,
        term_matches,
        total_words: tokens.len(),
    })
}

/// Every document of `files`, scored and fully sorted best first.
pub fn rank_documents(
    query: &Query,
    files: &TokenizedCollection<DocumentId>,
    idfs: &IdfTable,
) -> Result<Vec<DocumentScore>, RankingError> {
    check_scope(idfs, files)?;

    let mut scored = files
        .iter()
        .map(|(id, tokens)| score_document(query, id, tokens, idfs))
        .collect::<Result<Vec<_>, _>>()?;

    scored.sort_by(document_order);

    debug_assert!(scored.windows(2).all(|w| {
        let (a, b) = (&w[0], &w[1]);
        a.score > b.score || (a.score == b.score && a.id <= b.id)
    }));

    Ok(scored)
}

/// The `n` best documents for `query`, best first. Fewer when the collection is smaller.
pub fn top_files(
    query: &Query,
    files: &TokenizedCollection<DocumentId>,
    idfs: &IdfTable,
    n: usize,
) -> Result<Vec<DocumentId>, RankingError> {
    Ok(rank_documents(query, files, idfs)?
        .into_iter()
        .take(n)
        .map(|scored| scored.id)
        .collect())
}
