use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use thiserror::Error;

use docmcp_protocol::{ErrorBody, ProtocolError};

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid request body: {0}")]
    InvalidBody(String),

    #[error("unknown tool: {0}")]
    UnknownTool(String),

    #[error("protocol error: {0}")]
    Protocol(ProtocolError),

    #[error("store error: {0}")]
    Store(#[from] docmcp_store::StoreError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServerResult<T> = Result<T, ServerError>;

impl From<ProtocolError> for ServerError {
    fn from(err: ProtocolError) -> Self {
        match err {
            ProtocolError::UnknownTool(name) => Self::UnknownTool(name),
            ProtocolError::Deserialization(reason) => Self::InvalidBody(reason),
            other => Self::Protocol(other),
        }
    }
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
            Self::UnknownTool(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The JSON body sent to the client. Decode details stay in the logs.
    pub fn body(&self) -> ErrorBody {
        match self {
            Self::InvalidBody(_) => ErrorBody::invalid_body(),
            Self::UnknownTool(name) => ErrorBody::unknown_tool(name),
            other => ErrorBody::new(other.to_string()),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, %status, "request rejected");
        }
        (status, Json(self.body())).into_response()
    }
}
