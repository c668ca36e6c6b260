//! Error types for the country-data provider.

use thiserror::Error;

/// Provider error types.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The requested country or region does not exist upstream.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Upstream answered with a non-success status.
    #[error("Upstream returned {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, possibly empty.
        body: String,
    },

    /// HTTP request error (connection, timeout, TLS).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Payload could not be decoded as country records.
    #[error("Decode error: {0}")]
    Decode(String),

    /// Upstream answered successfully but with no data.
    #[error("Empty response for {0}")]
    EmptyResponse(String),

    /// IO error while reading a local country snapshot.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for ProviderError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// Result type alias for provider operations.
pub type Result<T> = std::result::Result<T, ProviderError>;
