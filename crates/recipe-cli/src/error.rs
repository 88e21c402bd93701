//! Error types for recipe-cli

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for recipe-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in recipe-cli
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Configuration problem
    #[error("Configuration error: {message}")]
    Config {
        /// What is wrong
        message: String,
    },

    /// File I/O failed
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// File involved
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// JSON output could not be rendered
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Error from recipe-core
    #[error("Core error: {0}")]
    Core(#[from] recipe_core::Error),

    /// Error from the server
    #[error("Server error: {0}")]
    Api(#[from] recipe_api::Error),

    /// Error from the client
    #[error("Client error: {0}")]
    Client(#[from] recipe_client::Error),

    /// The recipe list could not be loaded
    #[error("{message}")]
    Load {
        /// User-facing message
        message: String,
        /// What the client reported
        #[source]
        source: recipe_client::Error,
    },
}

impl Error {
    /// Creates a configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Creates an I/O error tagged with the file it concerns.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        assert_eq!(
            Error::config("bad port").to_string(),
            "Configuration error: bad port"
        );
    }

    #[test]
    fn test_io_error_display_includes_path() {
        let e = Error::io_with_path(
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
            "/tmp/config.toml",
        );
        assert_eq!(e.to_string(), "I/O error at /tmp/config.toml: missing");
    }
}
