//! HTTP server for docmcp.
//!
//! Serves a fixed document corpus through a tool-calling surface: a
//! capability announcement over an event stream, `search` and `fetch` tool
//! execution, and a health check. Every handler is a pure function of the
//! request and the immutable store.

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;
pub mod state;
pub mod tools;

pub use config::{ServerConfig, DEFAULT_SERVICE_NAME};
pub use error::{ServerError, ServerResult};
pub use router::build_router;
pub use server::DocServer;
pub use state::AppState;
