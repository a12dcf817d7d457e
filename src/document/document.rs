use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::identifiers::{DocumentId, DocumentVersion};

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Content must be valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

/// One raw corpus text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    pub version: DocumentVersion,
    pub content: String,
}

impl Document {
    /// Ingest raw bytes into a Document.
    ///
    /// Content is validated as UTF-8 and versioned by its SHA-256 hash.
    /// No newline or whitespace normalization is performed.
    pub fn ingest(id: DocumentId, raw_content: Vec<u8>) -> Result<Self, DocumentError> {
        let content = String::from_utf8(raw_content)?;

        let version = DocumentVersion::from_content(content.as_bytes());

        Ok(Document {
            id,
            version,
            content,
        })
    }

    /// Lines of raw text, as the sentence extractor sees them.
    pub fn passages(&self) -> impl Iterator<Item = &str> {
        self.content.split('\n')
    }
}
