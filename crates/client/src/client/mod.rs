//! HTTP client for the search cluster.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `indices`: listing and deleting indices
//! - `snapshots`: snapshotting and restoring
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Retention decisions (handled by the janitor crate)
//!
//! # Invariants
//! - Requests are never retried; each operation maps to exactly one HTTP call
//! - Snapshot names take their timestamp from the injected [`Clock`]

pub mod builder;

mod indices;
mod snapshots;

use std::sync::Arc;

use async_trait::async_trait;
use es_config::BasicAuth;

use crate::clock::Clock;
use crate::engine::SearchEngine;
use crate::error::Result;
use crate::metrics::MetricsCollector;
use crate::models::Index;

/// reqwest-backed search cluster client.
///
/// ```rust,ignore
/// use es_client::EsClient;
///
/// let client = EsClient::builder()
///     .endpoint("http://localhost:9200".to_string())
///     .build()?;
/// let indices = client.cat_indices().await?;
/// ```
#[derive(Debug)]
pub struct EsClient {
    pub(crate) http: reqwest::Client,
    pub(crate) endpoint: String,
    pub(crate) auth: Option<BasicAuth>,
    pub(crate) clock: Arc<dyn Clock>,
    pub(crate) metrics: Option<MetricsCollector>,
}

impl EsClient {
    /// Create a new client builder.
    pub fn builder() -> builder::EsClientBuilder {
        builder::EsClientBuilder::new()
    }

    /// Get the normalized endpoint.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Whether requests carry HTTP basic credentials.
    pub fn has_auth(&self) -> bool {
        self.auth.is_some()
    }
}

#[async_trait]
impl SearchEngine for EsClient {
    async fn cat_indices(&self) -> Result<Vec<Index>> {
        self.list_indices().await
    }

    async fn delete_index(&self, name: &str) -> Result<()> {
        self.remove_index(name).await
    }

    async fn snapshot_index(&self, repository: &str, index_name: &str) -> Result<String> {
        self.create_snapshot(repository, index_name).await
    }

    async fn restore_snapshot(&self, repository: &str, snapshot_name: &str) -> Result<()> {
        self.restore(repository, snapshot_name).await
    }
}
