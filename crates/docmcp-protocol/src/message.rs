use serde::{Deserialize, Serialize};

use crate::tool::{manifest, ToolDescriptor};

/// SSE event name every announcement frame is sent under.
pub const EVENT_NAME: &str = "message";

/// Status reported in the connection acknowledgment.
pub const CONNECTED: &str = "connected";

/// Messages of the capability announcement stream.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StreamMessage {
    Connection { status: String },
    Tools { tools: Vec<ToolDescriptor> },
}

impl StreamMessage {
    pub fn connected() -> Self {
        Self::Connection { status: CONNECTED.into() }
    }

    pub fn tools() -> Self {
        Self::Tools { tools: manifest() }
    }
}

/// The full announcement: connection acknowledgment, then the tool manifest.
pub fn announcement() -> Vec<StreamMessage> {
    vec![StreamMessage::connected(), StreamMessage::tools()]
}
