//! Snapshot and restore endpoints.

use reqwest::Client;

use super::indices::with_auth;
use crate::endpoints::{encode_path_segment, encode_snapshot_list, send_request};
use crate::error::Result;
use crate::metrics::MetricsCollector;
use crate::models::SnapshotRequest;
use es_config::BasicAuth;

/// Snapshot a single index as `snapshot_name` and wait for completion.
///
/// `PUT /_snapshot/<repository>/<snapshot_name>?wait_for_completion=true`
pub async fn snapshot_index(
    client: &Client,
    base_url: &str,
    auth: Option<&BasicAuth>,
    repository: &str,
    index_name: &str,
    snapshot_name: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<()> {
    let url = format!(
        "{}/_snapshot/{}/{}",
        base_url,
        encode_path_segment(repository),
        encode_path_segment(snapshot_name)
    );

    let builder = with_auth(client.put(&url), auth)
        .query(&[("wait_for_completion", "true")])
        .json(&SnapshotRequest::for_index(index_name));
    send_request(
        builder,
        "/_snapshot/{repository}/{snapshot}",
        "PUT",
        &format!("snapshot {snapshot_name}"),
        metrics,
    )
    .await?;

    Ok(())
}

/// Restore one snapshot, or a comma-joined list, and wait for completion.
///
/// `POST /_snapshot/<repository>/<snapshots>/_restore?wait_for_completion=true`
pub async fn restore_snapshot(
    client: &Client,
    base_url: &str,
    auth: Option<&BasicAuth>,
    repository: &str,
    snapshot_name: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<()> {
    let url = format!(
        "{}/_snapshot/{}/{}/_restore",
        base_url,
        encode_path_segment(repository),
        encode_snapshot_list(snapshot_name)
    );

    let builder = with_auth(client.post(&url), auth).query(&[("wait_for_completion", "true")]);
    send_request(
        builder,
        "/_snapshot/{repository}/{snapshot}/_restore",
        "POST",
        &format!("restore snapshot {snapshot_name}"),
        metrics,
    )
    .await?;

    Ok(())
}
