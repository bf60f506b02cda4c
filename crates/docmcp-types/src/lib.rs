//! Foundation types for docmcp.
//!
//! Every other docmcp crate depends on `docmcp-types`. The types here are
//! plain data: they carry no store or transport logic.
//!
//! # Key Types
//!
//! - [`Document`] - A corpus record (id, title, text, url, metadata)
//! - [`DocumentId`] - Validated document identifier
//! - [`Metadata`] - Insertion-ordered string-to-string metadata map
//! - [`SearchHit`] - The `{id, title, text, url}` projection returned by search

pub mod document;
pub mod error;
pub mod hit;
pub mod json;

pub use document::{Document, DocumentId, Metadata};
pub use error::TypeError;
pub use hit::SearchHit;
pub use json::to_spaced_json;
