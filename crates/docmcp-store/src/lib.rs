//! Immutable document storage and search for docmcp.
//!
//! The store is loaded once at process start (from the built-in corpus or a
//! TOML corpus file) and never written afterwards. Reads need no
//! synchronization; clones share the same underlying snapshot.
//!
//! # Storage Backends
//!
//! All backends implement the [`DocumentStore`] trait:
//!
//! - [`StaticDocumentStore`] -- `Arc`-backed snapshot with an id index
//!
//! # Search
//!
//! [`search()`] is a linear scan: a document matches when any lower-cased
//! query token is a substring of its lower-cased title, text, and metadata.

pub mod corpus;
pub mod error;
pub mod search;
pub mod static_store;
pub mod traits;

pub use corpus::{builtin_documents, load_corpus, parse_corpus};
pub use error::{StoreError, StoreResult};
pub use search::{search, tokenize, truncate_text, PREVIEW_CHARS};
pub use static_store::StaticDocumentStore;
pub use traits::DocumentStore;
