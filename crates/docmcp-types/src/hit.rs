use serde::{Deserialize, Serialize};

use crate::document::DocumentId;

/// A search result: a document projected to `{id, title, text, url}`.
///
/// `text` is whatever the search layer decided to expose, which is usually a
/// truncated preview of the document text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub id: DocumentId,
    pub title: String,
    pub text: String,
    pub url: String,
}
