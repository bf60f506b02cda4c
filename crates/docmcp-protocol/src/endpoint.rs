use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// HTTP endpoint paths.
pub mod endpoints {
    pub const SSE: &str = "/api/mcp/sse";
    /// Route pattern for tool execution; the segment is the tool name.
    pub const TOOL: &str = "/api/mcp/tools/:tool_name";
    pub const HEALTH: &str = "/api/health";
}

/// Health check response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub timestamp: String,
}

impl HealthResponse {
    pub fn healthy(service: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            status: "healthy".into(),
            service: service.into(),
            timestamp: now.to_rfc3339_opts(SecondsFormat::Micros, true),
        }
    }

    pub fn now(service: impl Into<String>) -> Self {
        Self::healthy(service, Utc::now())
    }
}
