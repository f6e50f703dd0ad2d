//! Retention orchestration for search-engine indices.
//!
//! [`Janitor`] lists indices through a [`es_client::SearchEngine`], selects
//! those whose name-embedded date is older than the retention window, and
//! snapshots then deletes each of them in listing order, stopping at the
//! first failure.

mod error;
mod janitor;

pub use error::{JanitorError, Result};
pub use janitor::{ArchivedIndex, Janitor};
