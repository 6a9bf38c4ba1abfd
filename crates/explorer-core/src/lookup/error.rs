//! # Lookup Errors
//!
//! Error types for repository lookups.

use thiserror::Error;

/// Errors that can occur while looking up a repository.
#[derive(Error, Debug)]
pub enum LookupError {
    /// The repository does not exist (HTTP 404).
    #[error("repository not found: {0}")]
    NotFound(String),

    /// Network or HTTP transport error.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The API answered with a non-success status other than 404.
    #[error("api error: {status} - {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body returned by the API.
        message: String,
    },

    /// Failed to deserialize the response body.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// Result type for lookup operations.
pub type LookupResult<T> = Result<T, LookupError>;
