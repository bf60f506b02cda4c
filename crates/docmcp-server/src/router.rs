use axum::http::{header, HeaderName, Method};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use docmcp_protocol::endpoints;

use crate::handler;
use crate::state::AppState;

/// Permissive CORS: any origin, and every OPTIONS request answered as a
/// preflight with an empty 200.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static("x-functions-key"),
        ])
}

/// Build the axum router with all docmcp endpoints.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            endpoints::SSE,
            get(handler::announce_handler).post(handler::announce_handler),
        )
        .route(endpoints::TOOL, post(handler::tool_handler))
        .route(endpoints::HEALTH, get(handler::health_handler))
        .with_state(state)
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}
