//! Error types for recipe-core

use thiserror::Error;

/// Result type alias for recipe-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in recipe-core
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A required field was missing or blank.
    #[error("Validation error: {field}: {message}")]
    Validation {
        /// Name of the offending field
        field: String,
        /// What went wrong
        message: String,
    },

    /// A recipe id could not be parsed.
    #[error("Invalid recipe id '{0}'")]
    InvalidId(String),

    /// Every id up to `u64::MAX` has been handed out.
    #[error("Recipe ids exhausted")]
    IdsExhausted,
}

impl Error {
    /// Creates a new validation error for a field.
    pub fn validation<F, M>(field: F, message: M) -> Self
    where
        F: Into<String>,
        M: Into<String>,
    {
        Error::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Whether the error was caused by the caller's input.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::Validation { .. } | Error::InvalidId(_))
    }
}
