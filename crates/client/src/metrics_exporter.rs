//! Prometheus metrics exporter.
//!
//! Serves everything recorded through [`crate::metrics::MetricsCollector`]
//! in Prometheus text format at `/metrics` for the lifetime of the process.

use std::net::SocketAddr;

use metrics_exporter_prometheus::{Matcher, PrometheusBuilder};
use tracing::info;

use crate::metrics::METRIC_REQUEST_DURATION;

/// Installed Prometheus exporter.
pub struct MetricsExporter {
    bind_addr: SocketAddr,
}

impl MetricsExporter {
    /// Install the Prometheus exporter as the global metrics recorder and
    /// start its HTTP listener on `bind_addr` (e.g. `127.0.0.1:9090`).
    ///
    /// # Errors
    /// Returns an error if the address does not parse, the buckets are
    /// rejected, the listener cannot start or another recorder is already
    /// installed.
    pub fn install(bind_addr: &str) -> Result<Self, MetricsExporterError> {
        let addr: SocketAddr = bind_addr
            .parse()
            .map_err(|e| MetricsExporterError::InvalidBindAddress(bind_addr.to_string(), e))?;

        // Snapshots with wait_for_completion can take minutes.
        PrometheusBuilder::new()
            .set_buckets_for_metric(
                Matcher::Full(METRIC_REQUEST_DURATION.to_string()),
                &[
                    0.005, 0.01, 0.05, 0.1, 0.5, 1.0, 5.0, 15.0, 60.0, 300.0, 900.0, 3600.0,
                ],
            )?
            .with_http_listener(addr)
            .install()?;

        info!(%addr, "Prometheus metrics exporter started");

        Ok(Self { bind_addr: addr })
    }

    /// Get the bind address.
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}

/// Errors that can occur when installing the metrics exporter.
#[derive(Debug, thiserror::Error)]
pub enum MetricsExporterError {
    #[error("Invalid bind address '{0}': {1}")]
    InvalidBindAddress(String, std::net::AddrParseError),

    #[error("Failed to build Prometheus recorder: {0}")]
    BuildError(String),
}

impl From<metrics_exporter_prometheus::BuildError> for MetricsExporterError {
    fn from(err: metrics_exporter_prometheus::BuildError) -> Self {
        MetricsExporterError::BuildError(err.to_string())
    }
}
