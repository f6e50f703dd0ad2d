//! Error types for the search-engine client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Transport failure: connection refused, DNS, TLS or request timeout.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Non-2xx response from the cluster.
    ///
    /// `operation` names what was attempted, including the resource
    /// (e.g. `delete index filebeat-6.4.3-2018.11.21`); `body` is the raw
    /// response body.
    #[error("failed to {operation}, response code: {status}, response body: {body}")]
    ApiError {
        operation: String,
        status: u16,
        url: String,
        body: String,
    },

    /// The response payload could not be decoded.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Invalid URL or client configuration.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// HTTP status code of an [`ClientError::ApiError`].
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if this error is a transport-level failure (no response received).
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::HttpError(e) if e.is_connect() || e.is_timeout() || e.is_request())
    }

    /// Check if this error is a request timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::HttpError(e) if e.is_timeout())
    }
}
