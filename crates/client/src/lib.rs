//! Elasticsearch REST API client for index retention.
//!
//! This crate provides the [`Index`] model with its name-embedded creation
//! date, the [`SearchEngine`] capability trait, and [`EsClient`], a
//! reqwest-backed implementation of it. An in-memory implementation lives in
//! [`testing`] behind the `test-utils` feature.

pub mod client;
pub mod clock;
pub mod endpoints;
pub mod engine;
pub mod error;
pub mod metrics;
pub mod metrics_exporter;
pub mod models;
mod serde_helpers;
pub mod telemetry;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use client::EsClient;
pub use client::builder::EsClientBuilder;
pub use clock::{Clock, FixedClock, SystemClock};
pub use engine::SearchEngine;
pub use error::{ClientError, Result};
pub use metrics::{ErrorCategory, MetricsCollector};
pub use metrics_exporter::{MetricsExporter, MetricsExporterError};
pub use models::{Index, IndexDateError, SnapshotRequest, date_from_index_name, snapshot_name};
pub use telemetry::{TracingConfig, TracingError, TracingGuard};
