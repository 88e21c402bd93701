//! Server configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Port the server listens on unless configured otherwise.
pub const DEFAULT_PORT: u16 = 3100;

/// Settings for the HTTP server, the `[server]` table of the config file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// TCP port to bind. `0` picks a free port.
    pub port: u16,
    /// Start with the two default recipes.
    pub seed: bool,
    /// Directory served for every path outside the API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub static_dir: Option<PathBuf>,
}

impl ServerConfig {
    /// `host:port` string handed to the listener.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            seed: true,
            static_dir: None,
        }
    }
}
