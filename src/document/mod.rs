pub mod collection;
pub mod document;

pub use crate::types::identifiers::{DocumentId, DocumentVersion};
pub use collection::TokenizedCollection;
pub use document::{Document, DocumentError};
