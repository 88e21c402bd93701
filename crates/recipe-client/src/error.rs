//! Error types for recipe-client

use thiserror::Error;

/// Result type alias for recipe-client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in recipe-client
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Input rejected before reaching the wire
    #[error("Core error: {0}")]
    Core(#[from] recipe_core::Error),

    /// Transport failure: the server could not be reached
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-2xx status
    #[error("Unexpected HTTP status: {status}")]
    Status {
        /// Status returned by the server
        status: reqwest::StatusCode,
    },

    /// The response body was not the expected JSON
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
}
