//! Data models for the search-engine REST API.

mod index;
mod snapshot;

pub use index::{Index, IndexDateError, date_from_index_name};
pub use snapshot::{SnapshotRequest, snapshot_name};
