use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("document id is empty")]
    EmptyId,

    #[error("document id has surrounding whitespace: {0:?}")]
    PaddedId(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}
