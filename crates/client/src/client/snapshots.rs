//! Snapshot API methods for [`EsClient`].

use tracing::debug;

use crate::client::EsClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::snapshot_name;

impl EsClient {
    /// Snapshot `index_name` into `repository` and return the snapshot name.
    ///
    /// The name is `index-<index_name>-on-<now>` with `now` from the client's clock.
    pub async fn create_snapshot(&self, repository: &str, index_name: &str) -> Result<String> {
        let name = snapshot_name(index_name, self.clock.now());
        debug!(repository, index = index_name, snapshot = %name, "Creating snapshot");

        endpoints::snapshot_index(
            &self.http,
            &self.endpoint,
            self.auth.as_ref(),
            repository,
            index_name,
            &name,
            self.metrics.as_ref(),
        )
        .await?;

        Ok(name)
    }

    /// Restore one snapshot, or a comma-joined list, from `repository`.
    pub async fn restore(&self, repository: &str, snapshot_name: &str) -> Result<()> {
        endpoints::restore_snapshot(
            &self.http,
            &self.endpoint,
            self.auth.as_ref(),
            repository,
            snapshot_name,
            self.metrics.as_ref(),
        )
        .await
    }
}
