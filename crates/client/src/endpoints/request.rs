//! Request execution with status checking and metrics.
//!
//! Requests are sent exactly once, carrying the current trace context. A non-2xx response becomes
//! [`ClientError::ApiError`] carrying the raw response body.

use std::time::Instant;

use reqwest::{RequestBuilder, Response};
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;
use crate::telemetry::inject_trace_context;

/// Send a request and require a 2xx status.
///
/// Any 2xx counts as success, not only 200: a restore may answer
/// `202 Accepted`, and no API used here signals failure inside 2xx.
///
/// `endpoint` and `method` label the recorded metrics; `operation` names the
/// attempted action in the error message (e.g. `delete index logs-2018.11.21`).
///
/// # Errors
///
/// Returns `ClientError::HttpError` when no response was received and
/// `ClientError::ApiError` for any non-2xx status.
pub async fn send_request(
    builder: RequestBuilder,
    endpoint: &str,
    method: &str,
    operation: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<Response> {
    if let Some(m) = metrics {
        m.record_request(endpoint, method);
    }

    let started = Instant::now();
    let result = inject_trace_context(builder).send().await;
    let elapsed = started.elapsed();

    let response = match result {
        Ok(response) => response,
        Err(e) => {
            let err = ClientError::from(e);
            if let Some(m) = metrics {
                m.record_request_duration(endpoint, method, elapsed, None);
                m.record_client_error(endpoint, method, &err);
            }
            return Err(err);
        }
    };

    let status = response.status().as_u16();
    if let Some(m) = metrics {
        m.record_request_duration(endpoint, method, elapsed, Some(status));
    }
    debug!(endpoint, method, status, elapsed_ms = elapsed.as_millis() as u64, "Request completed");

    if response.status().is_success() {
        return Ok(response);
    }

    let url = response.url().to_string();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());

    let err = ClientError::ApiError {
        operation: operation.to_string(),
        status,
        url,
        body,
    };
    if let Some(m) = metrics {
        m.record_client_error(endpoint, method, &err);
    }
    Err(err)
}
