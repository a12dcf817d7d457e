pub mod corpus;
pub mod manifest;

pub use corpus::{Corpus, CorpusError};
pub use manifest::{CorpusManifest, ManifestDocumentEntry};
