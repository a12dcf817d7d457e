pub mod identifiers;
pub mod retrieval;

pub use identifiers::{DocumentId, DocumentIdError, DocumentVersion};
pub use retrieval::{
    DocumentScore, PassageWhy, Query, RankedPassage, RankingError, RetrievalError,
    RetrievalMetadata, RetrievalResult, SentenceScore,
};
