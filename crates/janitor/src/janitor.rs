//! The retention orchestrator.
//!
//! # Invariants
//! - Indices are processed sequentially in listing order
//! - An index is eligible only when `now - date > days` (strictly)
//! - Names without a parseable trailing date are never eligible
//! - For each eligible index the snapshot, when enabled, precedes the delete
//! - The first failure ends the run; earlier work is not rolled back

use std::sync::Arc;

use chrono::TimeDelta;
use es_client::{Clock, Index, MetricsCollector, SearchEngine, SystemClock};
use es_config::SnapshotRepository;
use tracing::{debug, info};

use crate::error::{JanitorError, Result};

/// Outcome for one archived index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchivedIndex {
    pub name: String,
    /// Snapshot taken before deletion; `None` when snapshots are skipped.
    pub snapshot: Option<String>,
}

/// Retires indices older than a retention window.
#[derive(Debug)]
pub struct Janitor<E> {
    engine: E,
    repository: SnapshotRepository,
    clock: Arc<dyn Clock>,
    metrics: Option<MetricsCollector>,
}

impl<E: SearchEngine> Janitor<E> {
    pub fn new(engine: E, repository: SnapshotRepository) -> Self {
        Self {
            engine,
            repository,
            clock: Arc::new(SystemClock),
            metrics: None,
        }
    }

    /// Use `clock` for eligibility decisions.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_metrics(mut self, metrics: MetricsCollector) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn repository(&self) -> &SnapshotRepository {
        &self.repository
    }

    /// Indices whose name-embedded date is more than `days` days old.
    ///
    /// Indices without a usable date are logged and left out. A `days`
    /// window too large to represent makes nothing eligible.
    ///
    /// # Errors
    ///
    /// Returns [`JanitorError::Listing`] when the listing fails.
    pub async fn archive_eligible_indices(&self, days: u64) -> Result<Vec<Index>> {
        let indices = self
            .engine
            .cat_indices()
            .await
            .map_err(JanitorError::Listing)?;

        let Some(window) = i64::try_from(days).ok().and_then(TimeDelta::try_days) else {
            debug!(days, "Retention window out of range, nothing is eligible");
            return Ok(Vec::new());
        };

        let now = self.clock.now();
        let mut eligible = Vec::new();
        for index in indices {
            match index.date_from_name() {
                Ok(created) => {
                    if now.signed_duration_since(created) > window {
                        eligible.push(index);
                    }
                }
                Err(e) => {
                    debug!(index = %index.name, error = %e, "Skipping index without date");
                    if let Some(m) = &self.metrics {
                        m.record_index_skipped();
                    }
                }
            }
        }

        Ok(eligible)
    }

    /// Snapshot (unless skipped) and delete every eligible index.
    ///
    /// # Errors
    ///
    /// Stops at the first failure: [`JanitorError::Snapshot`] leaves the
    /// index in place, [`JanitorError::Delete`] keeps the snapshot just
    /// taken. Later indices are not touched either way.
    pub async fn archive_older_than(&self, days: u64) -> Result<Vec<ArchivedIndex>> {
        let eligible = self.archive_eligible_indices(days).await?;
        info!(
            days,
            eligible = eligible.len(),
            repository = %self.repository,
            "Archiving indices"
        );

        let mut archived = Vec::with_capacity(eligible.len());
        for index in eligible {
            let snapshot = match self.repository.name() {
                Some(repository) => {
                    let snapshot = self
                        .engine
                        .snapshot_index(repository, &index.name)
                        .await
                        .map_err(|source| JanitorError::Snapshot {
                            index: index.name.clone(),
                            source,
                        })?;
                    info!(index = %index.name, %snapshot, "Snapshot created");
                    Some(snapshot)
                }
                None => None,
            };

            self.engine
                .delete_index(&index.name)
                .await
                .map_err(|source| JanitorError::Delete {
                    index: index.name.clone(),
                    source,
                })?;
            info!(index = %index.name, "Index deleted");

            if let Some(m) = &self.metrics {
                m.record_index_archived(snapshot.is_some());
            }
            archived.push(ArchivedIndex {
                name: index.name,
                snapshot,
            });
        }

        Ok(archived)
    }

    /// Restore the named snapshots from the configured repository in one call.
    ///
    /// # Errors
    ///
    /// [`JanitorError::RepositoryRequired`] with the skip sentinel, otherwise
    /// [`JanitorError::Restore`] when the cluster rejects the restore.
    pub async fn restore(&self, snapshots: &[String]) -> Result<()> {
        let repository = self
            .repository
            .name()
            .ok_or(JanitorError::RepositoryRequired)?;
        let joined = snapshots.join(",");

        self.engine
            .restore_snapshot(repository, &joined)
            .await
            .map_err(|source| JanitorError::Restore {
                snapshots: joined.clone(),
                source,
            })?;
        info!(repository, snapshots = %joined, "Snapshots restored");

        Ok(())
    }
}
