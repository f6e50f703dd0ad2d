//! Configuration management for es-janitor.
//!
//! This crate provides types and loaders for the cluster connection and
//! retention settings, read from `.env` files, environment variables and
//! command-line overrides.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::{BasicAuth, Config, ConnectionConfig, RetentionConfig, SnapshotRepository};
