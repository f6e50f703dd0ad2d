//! Capability trait for the search-engine operations the janitor needs.
//!
//! [`crate::EsClient`] is the HTTP implementation; `testing::FakeSearchEngine`
//! is the in-memory one used by tests.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::Index;

/// Remote operations against a search cluster.
///
/// Every call is awaited to completion before the caller issues the next one.
#[async_trait]
pub trait SearchEngine: Send + Sync {
    /// List all indices in the order the cluster returns them.
    async fn cat_indices(&self) -> Result<Vec<Index>>;

    /// Delete a single index.
    async fn delete_index(&self, name: &str) -> Result<()>;

    /// Snapshot one index into `repository`, waiting for completion.
    ///
    /// Returns the generated snapshot name.
    async fn snapshot_index(&self, repository: &str, index_name: &str) -> Result<String>;

    /// Restore a snapshot, or a comma-joined list of snapshots, from `repository`.
    async fn restore_snapshot(&self, repository: &str, snapshot_name: &str) -> Result<()>;
}
