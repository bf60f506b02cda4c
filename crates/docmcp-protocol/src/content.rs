use serde::{Deserialize, Serialize};

use docmcp_types::{Document, SearchHit};

use crate::error::{ProtocolError, ProtocolResult};

/// Message for request bodies that fail to decode.
pub const INVALID_BODY_MESSAGE: &str = "Invalid request body";

/// One content block of a tool response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Content {
    Text { text: String },
}

impl Content {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    pub fn as_text(&self) -> &str {
        match self {
            Self::Text { text } => text,
        }
    }
}

/// `{"error": "..."}` payload, used both as an HTTP error body and inside
/// a tool response when the tool ran but found nothing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }

    pub fn invalid_body() -> Self {
        Self::new(INVALID_BODY_MESSAGE)
    }

    pub fn unknown_tool(name: &str) -> Self {
        Self::new(format!("Unknown tool: {name}"))
    }

    pub fn document_not_found(id: &str) -> Self {
        Self::new(format!("Document '{id}' not found"))
    }
}

/// Payload of a search response's text block.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResults {
    pub results: Vec<SearchHit>,
}

/// Result envelope of a tool call.
///
/// The tool's payload is JSON encoded into a single text block. Search
/// responses omit `isError`; fetch responses always carry it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolResponse {
    pub content: Vec<Content>,
    #[serde(rename = "isError", default, skip_serializing_if = "Option::is_none")]
    pub is_error: Option<bool>,
}

impl ToolResponse {
    fn json_text<T: Serialize>(payload: &T, is_error: Option<bool>) -> ProtocolResult<Self> {
        let text = serde_json::to_string(payload)
            .map_err(|e| ProtocolError::Serialization(e.to_string()))?;
        Ok(Self { content: vec![Content::text(text)], is_error })
    }

    pub fn search_results(results: Vec<SearchHit>) -> ProtocolResult<Self> {
        Self::json_text(&SearchResults { results }, None)
    }

    pub fn document(doc: &Document) -> ProtocolResult<Self> {
        Self::json_text(doc, Some(false))
    }

    /// A successful call whose target does not exist.
    pub fn document_not_found(id: &str) -> ProtocolResult<Self> {
        Self::json_text(&ErrorBody::document_not_found(id), Some(true))
    }

    pub fn is_error(&self) -> bool {
        self.is_error.unwrap_or(false)
    }

    /// Text of the first content block.
    pub fn text(&self) -> Option<&str> {
        self.content.first().map(Content::as_text)
    }

    /// Decode the first text block as JSON.
    pub fn decode_text<T: serde::de::DeserializeOwned>(&self) -> ProtocolResult<T> {
        let text = self
            .text()
            .ok_or_else(|| ProtocolError::Deserialization("empty content".into()))?;
        serde_json::from_str(text).map_err(|e| ProtocolError::Deserialization(e.to_string()))
    }
}
