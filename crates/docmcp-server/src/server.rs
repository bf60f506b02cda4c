use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::router::build_router;
use crate::state::AppState;

/// docmcp HTTP server.
pub struct DocServer {
    config: ServerConfig,
}

impl DocServer {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Load the store and build the router (useful for testing).
    pub fn router(&self) -> ServerResult<axum::Router> {
        Ok(build_router(AppState::from_config(&self.config)?))
    }

    /// Start serving requests until Ctrl-C.
    pub async fn serve(self) -> ServerResult<()> {
        let app = self.router()?;
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!("docmcp server listening on {}", self.config.bind_addr);
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn server_construction() {
        let server = DocServer::new(ServerConfig::default());
        assert_eq!(server.config().bind_addr, "127.0.0.1:7071".parse().unwrap());
    }

    #[test]
    fn router_builds_with_builtin_corpus() {
        let server = DocServer::new(ServerConfig::default());
        assert!(server.router().is_ok());
    }

    #[test]
    fn router_reports_bad_corpus() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[[documents]]\nid = \"\"\ntitle = \"t\"\ntext = \"x\"").unwrap();
        let config = ServerConfig {
            corpus_path: Some(file.path().to_path_buf()),
            ..ServerConfig::default()
        };
        let err = DocServer::new(config).router().unwrap_err();
        assert!(matches!(err, ServerError::Store(_)));
    }
}
