//! Configuration errors.
//!
//! Every variant names the setting at fault. `.env` failures report where the
//! file broke, never what it contained, since it usually holds the cluster
//! password.

use std::io::ErrorKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    #[error("Elasticsearch endpoint must be provided. Set ES_JANITOR_ENDPOINT or pass --endpoint.")]
    MissingEndpoint,

    #[error(
        "Elasticsearch snapshot repository must be provided. Set ES_JANITOR_REPOSITORY or pass --repository (use - to skip snapshots)."
    )]
    MissingRepository,

    #[error("Basic authentication requires both a username and a password")]
    IncompleteAuth,

    #[error("invalid timeout: {message}")]
    InvalidTimeout { message: String },

    #[error("invalid retention window: {message}")]
    InvalidRetentionDays { message: String },

    /// Syntax error in `.env`; only the byte offset is kept.
    #[error(".env file is malformed near byte {error_index} (set DOTENV_DISABLED=1 to ignore it)")]
    DotenvParse { error_index: usize },

    #[error(".env file could not be read: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// A dotenvy error kind added after this crate was written.
    #[error(".env file could not be loaded (set DOTENV_DISABLED=1 to ignore it)")]
    DotenvUnknown,
}
