use std::sync::Arc;

use docmcp_store::{DocumentStore, StaticDocumentStore};

use crate::config::{ServerConfig, DEFAULT_SERVICE_NAME};
use crate::error::ServerResult;

/// Shared, read-only handler state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
    pub service_name: Arc<str>,
}

impl AppState {
    pub fn new(store: impl DocumentStore + 'static, service_name: impl Into<Arc<str>>) -> Self {
        Self { store: Arc::new(store), service_name: service_name.into() }
    }

    /// Built-in corpus with the default service name.
    pub fn builtin() -> Self {
        Self::new(StaticDocumentStore::builtin(), DEFAULT_SERVICE_NAME)
    }

    /// Load the corpus named by `config` (or the built-in one).
    pub fn from_config(config: &ServerConfig) -> ServerResult<Self> {
        let store = StaticDocumentStore::from_optional_path(config.corpus_path.as_deref())?;
        tracing::info!(documents = store.len(), "document store ready");
        Ok(Self::new(store, config.service_name.as_str()))
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("document_count", &self.store.len())
            .field("service_name", &self.service_name)
            .finish()
    }
}
