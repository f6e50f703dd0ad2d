//! Configuration type definitions for es-janitor.
//!
//! Responsibilities:
//! - Define the cluster connection settings (endpoint, TLS, timeout, basic auth).
//! - Define the retention settings (days, snapshot repository).
//!
//! Does NOT handle:
//! - Configuration loading from the environment (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - Secret values use `secrecy::SecretString` to prevent accidental logging.
//! - Defaults come from `crate::constants`, not magic numbers.

mod connection;
mod retention;

pub use connection::{BasicAuth, ConnectionConfig};
pub use retention::{RetentionConfig, SnapshotRepository};

/// Main configuration structure.
#[derive(Debug, Clone)]
pub struct Config {
    /// Connection settings
    pub connection: ConnectionConfig,
    /// Retention settings
    pub retention: RetentionConfig,
}

impl Config {
    /// Create a config for the given endpoint and repository with default
    /// timeout and retention window.
    pub fn new(endpoint: String, repository: SnapshotRepository) -> Self {
        Self {
            connection: ConnectionConfig::new(endpoint),
            retention: RetentionConfig {
                repository,
                ..RetentionConfig::default()
            },
        }
    }
}
