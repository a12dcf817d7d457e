use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

use crate::document::Document;
use crate::types::identifiers::{DocumentId, DocumentVersion};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ManifestDocumentEntry {
    pub id: DocumentId,
    pub version: DocumentVersion,
    pub byte_size: usize,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CorpusManifest {
    pub corpus_version: String,
    pub loaded_at: DateTime<Utc>, // informational only
    pub document_count: usize,
    pub documents: Vec<ManifestDocumentEntry>,
}

/// Fingerprint over `id:version` lines of id-sorted documents.
pub(crate) fn corpus_version(sorted_docs: &[Document]) -> String {
    let mut hasher = Sha256::new();
    for doc in sorted_docs {
        let line = format!("{}:{}\n", doc.id.as_str(), doc.version.as_str());
        hasher.update(line.as_bytes());
    }
    format!("sha256:{}", hex::encode(hasher.finalize()))
}
