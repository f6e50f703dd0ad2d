//! Snapshot naming and request bodies.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// Name of the snapshot taken for `index_name` at `now`.
///
/// Format: `index-<indexName>-on-<RFC3339 UTC, seconds, Z suffix>`.
pub fn snapshot_name(index_name: &str, now: DateTime<Utc>) -> String {
    format!(
        "index-{}-on-{}",
        index_name,
        now.to_rfc3339_opts(SecondsFormat::Secs, true)
    )
}

/// Body of `PUT /_snapshot/<repository>/<snapshot>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnapshotRequest {
    pub indices: String,
    pub include_global_state: bool,
}

impl SnapshotRequest {
    /// Snapshot a single index without cluster-global state.
    pub fn for_index(index_name: &str) -> Self {
        Self {
            indices: index_name.to_string(),
            include_global_state: false,
        }
    }
}
