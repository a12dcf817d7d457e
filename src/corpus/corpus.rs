// Read-only after construction:
// no mutation
// no incremental updates

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use thiserror::Error;
use tracing::debug;

use crate::corpus::manifest::{corpus_version, CorpusManifest, ManifestDocumentEntry};
use crate::document::{Document, DocumentError};
use crate::types::identifiers::{DocumentId, DocumentIdError};

const CORPUS_EXTENSION: &str = "txt";

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Corpus path is not a directory: {0}")]
    NotADirectory(PathBuf),
    #[error("Invalid document {path}: {source}")]
    InvalidUtf8 {
        path: PathBuf,
        #[source]
        source: DocumentError,
    },
    #[error(transparent)]
    InvalidPath(#[from] DocumentIdError),
    #[error("Duplicate document ID: {0}")]
    DuplicateDocumentId(String),
}

/// Document identifier → raw text, sorted by identifier.
#[derive(Debug, Clone)]
pub struct Corpus {
    documents: Vec<Document>,
    version: String,
}

impl Corpus {
    pub fn from_documents(documents: Vec<Document>) -> Result<Self, CorpusError> {
        let mut sorted_docs = documents;
        sorted_docs.sort_by(|a, b| a.id.cmp(&b.id));

        for pair in sorted_docs.windows(2) {
            if pair[0].id == pair[1].id {
                return Err(CorpusError::DuplicateDocumentId(
                    pair[0].id.as_str().to_string(),
                ));
            }
        }

        let version = corpus_version(&sorted_docs);

        Ok(Self {
            documents: sorted_docs,
            version,
        })
    }

    /// Read every `*.txt` regular file directly inside `root`.
    pub fn load_dir(root: &Path) -> Result<Self, CorpusError> {
        if !root.is_dir() {
            return Err(CorpusError::NotADirectory(root.to_path_buf()));
        }

        let mut paths = Vec::new();
        for entry in fs::read_dir(root)? {
            let entry = entry?;
            let path = entry.path();
            let is_text = path
                .extension()
                .is_some_and(|ext| ext == CORPUS_EXTENSION);
            if entry.file_type()?.is_file() && is_text {
                paths.push(path);
            } else {
                debug!(path = %path.display(), "skipping non-corpus entry");
            }
        }
        paths.sort();

        let mut documents = Vec::with_capacity(paths.len());
        for path in paths {
            let id = DocumentId::from_path(root, &path)?;
            let raw = fs::read(&path)?;
            let doc = Document::ingest(id, raw).map_err(|source| {
                CorpusError::InvalidUtf8 {
                    path: path.clone(),
                    source,
                }
            })?;
            documents.push(doc);
        }

        debug!(root = %root.display(), documents = documents.len(), "loaded corpus");
        Self::from_documents(documents)
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn get(&self, id: &DocumentId) -> Option<&Document> {
        self.documents
            .binary_search_by(|doc| doc.id.cmp(id))
            .ok()
            .map(|i| &self.documents[i])
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Content fingerprint: identical corpora give identical versions.
    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn manifest(&self) -> CorpusManifest {
        CorpusManifest {
            corpus_version: self.version.clone(),
            loaded_at: Utc::now(),
            document_count: self.documents.len(),
            documents: self
                .documents
                .iter()
                .map(|doc| ManifestDocumentEntry {
                    id: doc.id.clone(),
                    version: doc.version.clone(),
                    byte_size: doc.content.len(),
                })
                .collect(),
        }
    }
}
