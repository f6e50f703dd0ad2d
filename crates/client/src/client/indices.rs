//! Index API methods for [`EsClient`].

use crate::client::EsClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::Index;

impl EsClient {
    /// List all indices in cluster order.
    pub async fn list_indices(&self) -> Result<Vec<Index>> {
        endpoints::cat_indices(
            &self.http,
            &self.endpoint,
            self.auth.as_ref(),
            self.metrics.as_ref(),
        )
        .await
    }

    /// Delete an index by name.
    pub async fn remove_index(&self, name: &str) -> Result<()> {
        endpoints::delete_index(
            &self.http,
            &self.endpoint,
            self.auth.as_ref(),
            name,
            self.metrics.as_ref(),
        )
        .await
    }
}
