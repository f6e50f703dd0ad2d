//! Retention configuration types.

use std::fmt;
use std::str::FromStr;

use crate::constants::{DEFAULT_RETENTION_DAYS, SKIP_SNAPSHOT_SENTINEL};

/// Where indices are snapshotted before deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotRepository {
    /// Delete without taking a snapshot (configured as `-`).
    Skip,
    /// Snapshot into the named repository first.
    Named(String),
}

impl SnapshotRepository {
    /// Returns the repository name, or `None` for [`SnapshotRepository::Skip`].
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Skip => None,
            Self::Named(name) => Some(name),
        }
    }

    pub fn is_skip(&self) -> bool {
        matches!(self, Self::Skip)
    }
}

impl FromStr for SnapshotRepository {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" => Err("repository name must not be empty".to_string()),
            SKIP_SNAPSHOT_SENTINEL => Ok(Self::Skip),
            name => Ok(Self::Named(name.to_string())),
        }
    }
}

impl fmt::Display for SnapshotRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Skip => f.write_str(SKIP_SNAPSHOT_SENTINEL),
            Self::Named(name) => f.write_str(name),
        }
    }
}

/// Retention settings for an archive run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetentionConfig {
    /// Indices strictly older than this many days are archived.
    pub days: u64,
    /// Snapshot destination.
    pub repository: SnapshotRepository,
}

impl Default for RetentionConfig {
    fn default() -> Self {
        Self {
            days: DEFAULT_RETENTION_DAYS,
            repository: SnapshotRepository::Skip,
        }
    }
}
