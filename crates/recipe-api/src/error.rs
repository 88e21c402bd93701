//! Error types for recipe-api

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Result type alias for recipe-api operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while running the server
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Could not bind the listener
    #[error("Failed to bind {address}: {source}")]
    Bind {
        /// Address that was requested
        address: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// I/O error while serving
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors returned by request handlers.
///
/// Rendered as a plain-text body; clients only look at the status code.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Invalid input rejected by the store
    #[error("{0}")]
    Core(#[from] recipe_core::Error),
}

impl ApiError {
    /// The status code this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Core(e) if e.is_client_error() => StatusCode::BAD_REQUEST,
            ApiError::Core(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, "Request rejected");
        }
        (status, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_bad_request() {
        let e = ApiError::from(recipe_core::Error::validation("title", "must not be empty"));
        assert_eq!(e.status(), StatusCode::BAD_REQUEST);
        assert_eq!(e.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_invalid_id_maps_to_bad_request() {
        let e = ApiError::from(recipe_core::Error::InvalidId("abc".into()));
        assert_eq!(e.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_ids_exhausted_maps_to_server_error() {
        let e = ApiError::from(recipe_core::Error::IdsExhausted);
        assert_eq!(e.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_bind_error_display() {
        let e = Error::Bind {
            address: "0.0.0.0:3100".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::AddrInUse, "in use"),
        };
        assert_eq!(e.to_string(), "Failed to bind 0.0.0.0:3100: in use");
    }
}
