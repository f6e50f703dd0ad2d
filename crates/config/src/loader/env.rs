//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse `ES_JANITOR_*` environment variables.
//! - Apply environment variable values to a ConfigLoader instance.
//! - Provide a helper for reading env vars with empty/whitespace filtering.
//!
//! Does NOT handle:
//! - Building the final Config (see builder.rs).
//! - .env file loading (handled by ConfigLoader::load_dotenv).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid numeric values return ConfigError::InvalidValue.

use secrecy::SecretString;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::{
    ENV_DAYS, ENV_ENDPOINT, ENV_PASSWORD, ENV_REPOSITORY, ENV_SKIP_VERIFY, ENV_TIMEOUT,
    ENV_USERNAME,
};

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(endpoint) = env_var_or_none(ENV_ENDPOINT) {
        loader.set_endpoint(Some(endpoint));
    }
    if let Some(repository) = env_var_or_none(ENV_REPOSITORY) {
        loader.set_repository(Some(repository));
    }
    if let Some(days) = env_var_or_none(ENV_DAYS) {
        let value: u64 = days.parse().map_err(|_| ConfigError::InvalidValue {
            var: ENV_DAYS.to_string(),
            message: "must be a non-negative integer".to_string(),
        })?;
        loader.set_days(Some(value));
    }
    if let Some(timeout) = env_var_or_none(ENV_TIMEOUT) {
        let secs: u64 = timeout.parse().map_err(|_| ConfigError::InvalidValue {
            var: ENV_TIMEOUT.to_string(),
            message: "must be a number".to_string(),
        })?;
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }
    if let Some(skip) = env_var_or_none(ENV_SKIP_VERIFY) {
        loader.set_skip_verify(Some(skip.parse().map_err(|_| {
            ConfigError::InvalidValue {
                var: ENV_SKIP_VERIFY.to_string(),
                message: "must be true or false".to_string(),
            }
        })?));
    }
    if let Some(username) = env_var_or_none(ENV_USERNAME) {
        loader.set_username(Some(username));
    }
    if let Some(password) = env_var_or_none(ENV_PASSWORD) {
        loader.set_password(Some(SecretString::new(password.into())));
    }

    Ok(())
}
