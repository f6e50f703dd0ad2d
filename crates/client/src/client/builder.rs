//! Client builder for constructing [`EsClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Normalizing the endpoint (removing trailing slashes)
//! - Configuring the underlying HTTP client (timeout, redirects, TLS verification)
//!
//! # Invariants
//! - `endpoint` is required
//! - `skip_verify` only affects HTTPS connections; HTTP connections log a warning

use std::sync::Arc;
use std::time::Duration;

use es_config::{
    BasicAuth, Config,
    constants::{DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT_SECS},
};
use secrecy::SecretString;

use crate::client::EsClient;
use crate::clock::{Clock, SystemClock};
use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;

/// Builder for creating a new [`EsClient`].
pub struct EsClientBuilder {
    endpoint: Option<String>,
    auth: Option<BasicAuth>,
    skip_verify: bool,
    timeout: Duration,
    clock: Arc<dyn Clock>,
    metrics: Option<MetricsCollector>,
}

impl Default for EsClientBuilder {
    fn default() -> Self {
        Self {
            endpoint: None,
            auth: None,
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            clock: Arc::new(SystemClock),
            metrics: None,
        }
    }
}

impl EsClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the cluster endpoint, e.g. `http://localhost:9200`.
    pub fn endpoint(mut self, url: String) -> Self {
        self.endpoint = Some(url);
        self
    }

    /// Send HTTP basic credentials with every request.
    pub fn basic_auth(mut self, username: String, password: SecretString) -> Self {
        self.auth = Some(BasicAuth { username, password });
        self
    }

    /// Set whether to skip TLS certificate verification.
    ///
    /// # Security Warning
    /// Disabling verification makes the connection vulnerable to
    /// man-in-the-middle attacks.
    pub fn skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = skip;
        self
    }

    /// Set the per-request timeout. Default is 300 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the clock used for snapshot names.
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Set the metrics collector for API call tracking.
    pub fn metrics(mut self, metrics: MetricsCollector) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Pre-configure the builder from loaded configuration.
    pub fn from_config(mut self, config: &Config) -> Self {
        self.endpoint = Some(config.connection.endpoint.clone());
        self.auth = config.connection.auth.clone();
        self.skip_verify = config.connection.skip_verify;
        self.timeout = config.connection.timeout;
        self
    }

    /// - `"http://localhost:9200/"` -> `"http://localhost:9200"`
    /// - `"http://localhost:9200//"` -> `"http://localhost:9200"`
    fn normalize_endpoint(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    /// Build the [`EsClient`].
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if no endpoint was provided and
    /// `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<EsClient> {
        let endpoint = self
            .endpoint
            .ok_or_else(|| ClientError::InvalidUrl("endpoint is required".to_string()))?;
        let endpoint = Self::normalize_endpoint(endpoint);

        let mut http_builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS));

        if self.skip_verify {
            if endpoint.starts_with("https://") {
                http_builder = http_builder.danger_accept_invalid_certs(true);
            } else {
                tracing::warn!(
                    "skip_verify=true has no effect on HTTP URLs. TLS verification only applies to HTTPS connections."
                );
            }
        }

        let http = http_builder.build()?;

        Ok(EsClient {
            http,
            endpoint,
            auth: self.auth,
            clock: self.clock,
            metrics: self.metrics,
        })
    }
}
