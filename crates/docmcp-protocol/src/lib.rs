//! Wire protocol for docmcp.
//!
//! Defines the tool manifest announced to connecting clients, the request and
//! response envelopes of tool calls, the event-stream framing of the
//! announcement, and the HTTP endpoint paths.

pub mod codec;
pub mod content;
pub mod endpoint;
pub mod error;
pub mod message;
pub mod tool;

pub use codec::EventStreamCodec;
pub use content::{Content, ErrorBody, SearchResults, ToolResponse};
pub use endpoint::{endpoints, HealthResponse};
pub use error::{ProtocolError, ProtocolResult};
pub use message::{announcement, StreamMessage, EVENT_NAME};
pub use tool::{
    decode_arguments, manifest, FetchRequest, InputSchema, JsonObject, PropertySchema,
    SearchRequest, ToolCall, ToolDescriptor, ToolName,
};
