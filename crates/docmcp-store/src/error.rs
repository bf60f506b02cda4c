use std::path::PathBuf;

use docmcp_types::{DocumentId, TypeError};

/// Errors from building a document store.
///
/// Reads never fail; every variant here is raised while loading or validating
/// a corpus.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Two documents share the same id.
    #[error("duplicate document id: {0}")]
    DuplicateId(DocumentId),

    /// A document record failed validation.
    #[error("invalid document: {0}")]
    InvalidDocument(#[from] TypeError),

    /// The corpus file could not be parsed.
    #[error("corpus parse error in {path}: {reason}")]
    Parse { path: PathBuf, reason: String },

    /// I/O error reading the corpus file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
