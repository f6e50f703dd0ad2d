//! Error types for retention runs.

use es_client::ClientError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, JanitorError>;

/// Errors that stop a retention run.
///
/// The client error is kept as the source, so `{:#}` shows the status code
/// and response body after the index name.
#[derive(Debug, Error)]
pub enum JanitorError {
    /// The index listing could not be fetched.
    #[error(transparent)]
    Listing(ClientError),

    /// Snapshotting `index` failed; it was not deleted.
    #[error("failed to snapshot index {index}")]
    Snapshot { index: String, source: ClientError },

    /// Deleting `index` failed; any snapshot already taken is kept.
    #[error("index {index} not deleted")]
    Delete { index: String, source: ClientError },

    #[error("snapshots {snapshots} not restored")]
    Restore { snapshots: String, source: ClientError },

    #[error("restoring snapshots requires a snapshot repository, got '-'")]
    RepositoryRequired,
}

impl JanitorError {
    /// The underlying client error, if any.
    pub fn client_error(&self) -> Option<&ClientError> {
        match self {
            Self::Listing(source)
            | Self::Snapshot { source, .. }
            | Self::Delete { source, .. }
            | Self::Restore { source, .. } => Some(source),
            Self::RepositoryRequired => None,
        }
    }

    /// Name of the index being processed when the run stopped.
    pub fn index(&self) -> Option<&str> {
        match self {
            Self::Snapshot { index, .. } | Self::Delete { index, .. } => Some(index.as_str()),
            _ => None,
        }
    }
}
