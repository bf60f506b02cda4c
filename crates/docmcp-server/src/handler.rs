use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Json, Response};

use docmcp_protocol::{
    announcement, decode_arguments, EventStreamCodec, HealthResponse, ToolCall, ToolName,
    ToolResponse,
};

use crate::error::ServerResult;
use crate::state::AppState;
use crate::tools;

/// Capability announcement: a connection frame and the tool manifest, sent
/// as a complete event-stream body.
pub async fn announce_handler() -> ServerResult<Response> {
    let body = EventStreamCodec::encode_all(&announcement())?;
    tracing::debug!(bytes = body.len(), "capability announcement");
    Ok((
        [
            (header::CONTENT_TYPE, "text/event-stream"),
            (header::CACHE_CONTROL, "no-cache"),
            (header::CONNECTION, "keep-alive"),
        ],
        body,
    )
        .into_response())
}

/// Tool execution.
///
/// The body is decoded before the tool name is checked, so a malformed body
/// is a 400 even for unknown tools.
pub async fn tool_handler(
    State(state): State<AppState>,
    Path(tool_name): Path<String>,
    body: Bytes,
) -> ServerResult<Json<ToolResponse>> {
    let args = decode_arguments(&body)?;
    let tool: ToolName = tool_name.parse()?;
    let call = ToolCall::from_arguments(tool, args)?;
    let response = tools::execute(&*state.store, &call)?;
    tracing::info!(tool = %tool, is_error = response.is_error(), "tool executed");
    Ok(Json(response))
}

/// Health check handler.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::now(&*state.service_name))
}
