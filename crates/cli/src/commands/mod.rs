//! Command implementations.

pub mod archive;
pub mod eligible;
pub mod restore;

use anyhow::{Context, Result};
use es_client::{EsClient, MetricsCollector};
use es_config::Config;
use es_janitor::Janitor;

/// Build the janitor, and its HTTP client, from loaded configuration.
pub fn build_janitor(
    config: &Config,
    metrics: Option<MetricsCollector>,
) -> Result<Janitor<EsClient>> {
    let mut builder = EsClient::builder().from_config(config);
    if let Some(ref m) = metrics {
        builder = builder.metrics(m.clone());
    }
    let client = builder.build().context("Failed to build HTTP client")?;

    let janitor = Janitor::new(client, config.retention.repository.clone());
    Ok(match metrics {
        Some(m) => janitor.with_metrics(m),
        None => janitor,
    })
}
