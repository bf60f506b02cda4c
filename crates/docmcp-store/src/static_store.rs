use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use docmcp_types::Document;

use crate::corpus;
use crate::error::{StoreError, StoreResult};
use crate::traits::DocumentStore;

/// Immutable, `Arc`-backed document store.
///
/// Built once and shared by cloning: every clone points at the same
/// snapshot, so handlers can read it concurrently without locks.
#[derive(Clone)]
pub struct StaticDocumentStore {
    documents: Arc<[Document]>,
    index: Arc<HashMap<String, usize>>,
}

impl StaticDocumentStore {
    /// Build a store, rejecting duplicate ids. Order is preserved.
    pub fn new(documents: Vec<Document>) -> StoreResult<Self> {
        let mut index = HashMap::with_capacity(documents.len());
        for (pos, doc) in documents.iter().enumerate() {
            if index.insert(doc.id.as_str().to_owned(), pos).is_some() {
                return Err(StoreError::DuplicateId(doc.id.clone()));
            }
        }
        Ok(Self {
            documents: documents.into(),
            index: Arc::new(index),
        })
    }

    /// Parse corpus TOML and build a store from it.
    pub fn from_toml_str(src: &str, origin: &Path) -> StoreResult<Self> {
        Self::new(corpus::parse_corpus(src, origin)?)
    }

    /// The built-in sample corpus.
    pub fn builtin() -> Self {
        Self::from_toml_str(corpus::BUILTIN_CORPUS, Path::new(corpus::BUILTIN_ORIGIN))
            .expect("built-in corpus parses and has unique ids")
    }

    /// Load a store from a TOML corpus file.
    pub fn from_path(path: impl AsRef<Path>) -> StoreResult<Self> {
        Self::new(corpus::load_corpus(path)?)
    }

    /// Load from `path` when given, otherwise fall back to the built-in corpus.
    pub fn from_optional_path(path: Option<&Path>) -> StoreResult<Self> {
        match path {
            Some(path) => Self::from_path(path),
            None => Ok(Self::builtin()),
        }
    }

    /// Document ids in store order.
    pub fn ids(&self) -> Vec<&str> {
        self.documents.iter().map(|d| d.id.as_str()).collect()
    }
}

impl DocumentStore for StaticDocumentStore {
    fn all(&self) -> &[Document] {
        &self.documents
    }

    fn by_id(&self, id: &str) -> Option<&Document> {
        self.index.get(id).map(|&pos| &self.documents[pos])
    }
}

impl std::fmt::Debug for StaticDocumentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticDocumentStore")
            .field("document_count", &self.documents.len())
            .finish()
    }
}
