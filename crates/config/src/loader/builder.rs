//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for layered configuration merging.
//! - Build and validate the final `Config` from loaded values.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//!
//! Invariants / Assumptions:
//! - Builder methods take precedence over environment variables when applied after `from_env()`.
//! - Endpoint and repository are required; everything else has a default.
//! - The endpoint is always normalized to have no trailing slashes.

use secrecy::SecretString;
use std::time::Duration;

use super::env::apply_env;
use super::error::ConfigError;
use crate::constants::{
    DEFAULT_RETENTION_DAYS, DEFAULT_TIMEOUT_SECS, MAX_RETENTION_DAYS, MAX_TIMEOUT_SECS,
};
use crate::types::{BasicAuth, Config, ConnectionConfig, RetentionConfig, SnapshotRepository};

/// Configuration loader that builds config from environment variables and overrides.
#[derive(Default)]
pub struct ConfigLoader {
    endpoint: Option<String>,
    repository: Option<String>,
    days: Option<u64>,
    timeout: Option<Duration>,
    skip_verify: Option<bool>,
    username: Option<String>,
    password: Option<SecretString>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` environment variable is set to "true" or "1",
    /// the .env file will not be loaded (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if the `.env` file exists but has invalid syntax
    /// (`ConfigError::DotenvParse`) or cannot be read (`ConfigError::DotenvIo`).
    /// Missing `.env` files are silently ignored.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            tracing::debug!("DOTENV_DISABLED is set, skipping .env");
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(path) => {
                tracing::debug!(path = %path.display(), "Loaded .env file");
                Ok(self)
            }
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Read configuration from environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Set the cluster endpoint.
    pub fn with_endpoint(mut self, endpoint: String) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Set the snapshot repository (`-` skips snapshots).
    pub fn with_repository(mut self, repository: String) -> Self {
        self.repository = Some(repository);
        self
    }

    /// Set the retention window in days.
    pub fn with_days(mut self, days: u64) -> Self {
        self.days = Some(days);
        self
    }

    /// Set the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set whether to skip TLS verification.
    pub fn with_skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = Some(skip);
        self
    }

    /// Set the basic auth username.
    pub fn with_username(mut self, username: String) -> Self {
        self.username = Some(username);
        self
    }

    /// Set the basic auth password.
    pub fn with_password(mut self, password: String) -> Self {
        self.password = Some(SecretString::new(password.into()));
        self
    }

    /// Build the final configuration.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::MissingEndpoint`] / [`ConfigError::MissingRepository`] when a
    ///   required value was never supplied.
    /// - [`ConfigError::InvalidValue`] for a malformed endpoint.
    /// - [`ConfigError::InvalidTimeout`] / [`ConfigError::InvalidRetentionDays`] for
    ///   out-of-range values.
    /// - [`ConfigError::IncompleteAuth`] when only one of username/password is set.
    pub fn build(self) -> Result<Config, ConfigError> {
        let endpoint = self
            .endpoint
            .as_deref()
            .map(validate_and_normalize_endpoint)
            .transpose()?
            .ok_or(ConfigError::MissingEndpoint)?;

        let repository = match self.repository.as_deref().map(str::trim) {
            None | Some("") => return Err(ConfigError::MissingRepository),
            Some(raw) => raw
                .parse::<SnapshotRepository>()
                .map_err(|message| ConfigError::InvalidValue {
                    var: "repository".to_string(),
                    message,
                })?,
        };

        let auth = match (self.username, self.password) {
            (Some(username), Some(password)) => Some(BasicAuth { username, password }),
            (None, None) => None,
            _ => return Err(ConfigError::IncompleteAuth),
        };

        let connection = ConnectionConfig {
            endpoint,
            skip_verify: self.skip_verify.unwrap_or(false),
            timeout: self
                .timeout
                .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            auth,
        };
        Self::validate_timeout(connection.timeout)?;

        let retention = RetentionConfig {
            days: self.days.unwrap_or(DEFAULT_RETENTION_DAYS),
            repository,
        };
        if retention.days > MAX_RETENTION_DAYS {
            return Err(ConfigError::InvalidRetentionDays {
                message: format!(
                    "days exceeds maximum allowed value of {} (got {})",
                    MAX_RETENTION_DAYS, retention.days
                ),
            });
        }

        Ok(Config {
            connection,
            retention,
        })
    }

    /// Checks the timeout is greater than 0 and does not exceed MAX_TIMEOUT_SECS.
    fn validate_timeout(timeout: Duration) -> Result<(), ConfigError> {
        let timeout_secs = timeout.as_secs();

        if timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout {
                message: "timeout must be greater than 0 seconds".to_string(),
            });
        }

        if timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::InvalidTimeout {
                message: format!(
                    "timeout exceeds maximum allowed value of {} seconds",
                    MAX_TIMEOUT_SECS
                ),
            });
        }

        Ok(())
    }

    // Internal setters for use by env.rs

    pub(crate) fn set_endpoint(&mut self, endpoint: Option<String>) {
        self.endpoint = endpoint;
    }

    pub(crate) fn set_repository(&mut self, repository: Option<String>) {
        self.repository = repository;
    }

    pub(crate) fn set_days(&mut self, days: Option<u64>) {
        self.days = days;
    }

    pub(crate) fn set_timeout(&mut self, timeout: Option<Duration>) {
        self.timeout = timeout;
    }

    pub(crate) fn set_skip_verify(&mut self, skip: Option<bool>) {
        self.skip_verify = skip;
    }

    pub(crate) fn set_username(&mut self, username: Option<String>) {
        self.username = username;
    }

    pub(crate) fn set_password(&mut self, password: Option<SecretString>) {
        self.password = password;
    }
}

/// Validates and normalizes an endpoint string.
///
/// Validation rules:
/// - Trim surrounding whitespace
/// - Treat blank/whitespace-only as missing
/// - Parse as an absolute URL with an http or https scheme and a host
/// - Normalize by stripping trailing slashes
fn validate_and_normalize_endpoint(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(ConfigError::MissingEndpoint);
    }

    let parsed = url::Url::parse(trimmed).map_err(|e| ConfigError::InvalidValue {
        var: "endpoint".into(),
        message: format!(
            "must be an absolute http(s) URL with a host (e.g. http://localhost:9200): {e}"
        ),
    })?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(ConfigError::InvalidValue {
            var: "endpoint".into(),
            message: format!(
                "scheme must be http or https (e.g. http://localhost:9200), got: {scheme}"
            ),
        });
    }

    if parsed.host_str().is_none() {
        return Err(ConfigError::InvalidValue {
            var: "endpoint".into(),
            message: "host is required (e.g. http://localhost:9200)".into(),
        });
    }

    Ok(parsed.as_str().trim_end_matches('/').to_string())
}
