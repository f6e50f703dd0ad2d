//! Metrics collection for cluster API calls and retention runs.
//!
//! This module records:
//! - Request latency histograms
//! - Request and error counters, errors labelled by category
//! - Archived and skipped index counters
//!
//! # What this module does NOT handle:
//! - Metrics exposition (see [`crate::metrics_exporter`])
//!
//! # Invariants
//! - Label names are `endpoint`, `method`, `status`, `error_category`
//! - Recording never fails and is a no-op without an installed recorder

use crate::error::ClientError;
use std::time::Duration;

/// Metric name for request duration histogram.
pub const METRIC_REQUEST_DURATION: &str = "es_janitor_request_duration_seconds";

/// Metric name for total request counter.
pub const METRIC_REQUESTS_TOTAL: &str = "es_janitor_requests_total";

/// Metric name for error counter.
pub const METRIC_ERRORS_TOTAL: &str = "es_janitor_errors_total";

/// Metric name for indices snapshotted (when enabled) and deleted.
pub const METRIC_INDICES_ARCHIVED: &str = "es_janitor_indices_archived_total";

/// Metric name for indices left in place because their name carries no date.
pub const METRIC_INDICES_SKIPPED: &str = "es_janitor_indices_skipped_total";

/// Error categories for metrics labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Connection refused, DNS and similar
    Transport,
    /// HTTP 4xx client errors
    Http4xx,
    /// HTTP 5xx server errors
    Http5xx,
    /// Non-2xx statuses outside 4xx/5xx
    Api,
    /// Request timeout
    Timeout,
    /// Response payload could not be decoded
    Decode,
    /// Unknown/unclassified errors
    Unknown,
}

impl ErrorCategory {
    /// Returns the string label for this error category.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Transport => "transport",
            ErrorCategory::Http4xx => "http_4xx",
            ErrorCategory::Http5xx => "http_5xx",
            ErrorCategory::Api => "api",
            ErrorCategory::Timeout => "timeout",
            ErrorCategory::Decode => "decode",
            ErrorCategory::Unknown => "unknown",
        }
    }
}

impl From<&ClientError> for ErrorCategory {
    fn from(error: &ClientError) -> Self {
        match error {
            ClientError::ApiError { status, .. } => {
                if (400..500).contains(status) {
                    ErrorCategory::Http4xx
                } else if (500..600).contains(status) {
                    ErrorCategory::Http5xx
                } else {
                    ErrorCategory::Api
                }
            }
            e if e.is_timeout() => ErrorCategory::Timeout,
            e if e.is_transport() => ErrorCategory::Transport,
            ClientError::InvalidResponse(_) => ErrorCategory::Decode,
            _ => ErrorCategory::Unknown,
        }
    }
}

/// Metrics collector for cluster calls and retention outcomes.
///
/// A thin wrapper around the `metrics` macros with consistent labels.
#[derive(Debug, Clone, Default)]
pub struct MetricsCollector {
    enabled: bool,
}

impl MetricsCollector {
    /// Create an enabled collector.
    pub fn new() -> Self {
        Self { enabled: true }
    }

    /// Create a collector that records nothing.
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Record the duration of an API request.
    ///
    /// `status` is `None` when no response was received.
    pub fn record_request_duration(
        &self,
        endpoint: &str,
        method: &str,
        duration: Duration,
        status: Option<u16>,
    ) {
        if !self.enabled {
            return;
        }

        let status_label = status.map_or("error".to_string(), |s| s.to_string());

        metrics::histogram!(METRIC_REQUEST_DURATION,
            "endpoint" => endpoint.to_string(),
            "method" => method.to_string(),
            "status" => status_label,
        )
        .record(duration.as_secs_f64());
    }

    /// Record a request attempt.
    pub fn record_request(&self, endpoint: &str, method: &str) {
        if !self.enabled {
            return;
        }

        metrics::counter!(METRIC_REQUESTS_TOTAL,
            "endpoint" => endpoint.to_string(),
            "method" => method.to_string(),
        )
        .increment(1);
    }

    /// Record an error.
    pub fn record_error(&self, endpoint: &str, method: &str, category: ErrorCategory) {
        if !self.enabled {
            return;
        }

        metrics::counter!(METRIC_ERRORS_TOTAL,
            "endpoint" => endpoint.to_string(),
            "method" => method.to_string(),
            "error_category" => category.as_str(),
        )
        .increment(1);
    }

    /// Record an error, categorizing it automatically.
    pub fn record_client_error(&self, endpoint: &str, method: &str, error: &ClientError) {
        self.record_error(endpoint, method, ErrorCategory::from(error));
    }

    /// Record one archived index.
    pub fn record_index_archived(&self, snapshotted: bool) {
        if !self.enabled {
            return;
        }
        metrics::counter!(METRIC_INDICES_ARCHIVED,
            "snapshot" => if snapshotted { "true" } else { "false" },
        )
        .increment(1);
    }

    /// Record one index whose name has no parseable date.
    pub fn record_index_skipped(&self) {
        if !self.enabled {
            return;
        }
        metrics::counter!(METRIC_INDICES_SKIPPED).increment(1);
    }
}
