//! Connection configuration types.
//!
//! Invariants:
//! - `endpoint` never carries a trailing slash once built by the loader.
//! - `BasicAuth` is only present when both username and password were supplied.

use secrecy::SecretString;
use std::time::Duration;

use crate::constants::DEFAULT_TIMEOUT_SECS;

/// Connection configuration for the search cluster.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Base URL of the cluster (e.g., http://localhost:9200)
    pub endpoint: String,
    /// Whether to skip TLS verification (for self-signed certificates)
    pub skip_verify: bool,
    /// Per-request timeout
    pub timeout: Duration,
    /// Optional HTTP basic authentication
    pub auth: Option<BasicAuth>,
}

impl ConnectionConfig {
    /// Create connection settings for `endpoint` with default timeout and no auth.
    pub fn new(endpoint: String) -> Self {
        Self {
            endpoint,
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            auth: None,
        }
    }
}

/// HTTP basic authentication credentials.
#[derive(Debug, Clone)]
pub struct BasicAuth {
    pub username: String,
    pub password: SecretString,
}
