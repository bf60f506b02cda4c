use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ServerError, ServerResult};

pub const DEFAULT_SERVICE_NAME: &str = "MCP Server for ChatGPT";

/// Server configuration, usually read from a TOML file.
///
/// Every field is optional in the file; missing fields take the defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Reported in the `service` field of health responses.
    pub service_name: String,
    /// TOML corpus to serve. The built-in corpus is used when unset.
    pub corpus_path: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 7071)),
            service_name: DEFAULT_SERVICE_NAME.into(),
            corpus_path: None,
        }
    }
}

impl ServerConfig {
    pub fn from_toml_str(src: &str) -> ServerResult<Self> {
        toml::from_str(src).map_err(|e| ServerError::Config(e.to_string()))
    }

    pub fn load(path: impl AsRef<Path>) -> ServerResult<Self> {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&src)?;
        tracing::debug!(path = %path.display(), "loaded server config");
        Ok(config)
    }
}
