//! The `recipes` configuration file.
//!
//! Resolution order for the file: an explicit path (`--config` or
//! `RECIPES_CONFIG`), then `<config dir>/recipes/config.toml`. A missing
//! default file is not an error; built-in defaults apply.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use recipe_api::ServerConfig;
use recipe_client::ClientConfig;

use crate::{Error, Result};

/// Name of the directory under the platform config dir.
pub const PROJECT_NAME: &str = "recipes";

/// Top-level configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecipeConfig {
    /// `[server]` table
    pub server: ServerConfig,
    /// `[client]` table
    pub client: ClientConfig,
}

impl RecipeConfig {
    /// Load from `explicit` if given, else from the default location if it
    /// exists, else return defaults.
    pub fn load(explicit: Option<&str>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(Path::new(path)),
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => {
                    tracing::debug!("No config file found, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    /// Parse a config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        tracing::debug!(path = %path.display(), "Loading config");
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        toml::from_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))
    }

    /// `<config dir>/recipes/config.toml`, if the platform has a config dir.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(PROJECT_NAME).join("config.toml"))
    }

    /// The path [`load`](Self::load) would read for `explicit`.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        explicit.map(PathBuf::from).or_else(Self::default_config_path)
    }

    /// Render as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RecipeConfig::default();
        assert_eq!(config.server.port, 3100);
        assert!(config.server.seed);
        assert_eq!(config.client.base_url, "http://localhost:3100");
    }

    #[test]
    fn test_from_file_partial() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server]\nport = 8080\nseed = false\n").unwrap();

        let config = RecipeConfig::from_file(&path).unwrap();
        assert_eq!(config.server.port, 8080);
        assert!(!config.server.seed);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.client, ClientConfig::default());
    }

    #[test]
    fn test_from_file_static_dir_and_timeout() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[server]\nstatic_dir = \"public\"\n\n[client]\nbase_url = \"http://example:9000\"\ntimeout_secs = 10\n",
        )
        .unwrap();

        let config = RecipeConfig::from_file(&path).unwrap();
        assert_eq!(config.server.static_dir, Some(PathBuf::from("public")));
        assert_eq!(config.client.base_url, "http://example:9000");
        assert_eq!(config.client.timeout_secs, Some(10));
    }

    #[test]
    fn test_from_file_invalid_toml() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server\nport = ").unwrap();

        let err = RecipeConfig::from_file(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[test]
    fn test_load_explicit_missing_file() {
        let err = RecipeConfig::load(Some("/nonexistent/recipes.toml")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = RecipeConfig::default();
        config.server.port = 4000;
        let text = config.to_toml_string().unwrap();
        assert!(text.contains("[server]"));
        assert!(text.contains("[client]"));

        let parsed: RecipeConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_resolve_config_path_explicit() {
        assert_eq!(
            RecipeConfig::resolve_config_path(Some("/etc/recipes.toml")),
            Some(PathBuf::from("/etc/recipes.toml"))
        );
    }
}
