//! Restore command implementation.

use anyhow::Result;
use es_client::SearchEngine;
use es_janitor::Janitor;

use crate::cancellation::{CancellationToken, Cancelled};

pub async fn run<E: SearchEngine>(
    janitor: &Janitor<E>,
    snapshots: &[String],
    cancel: &CancellationToken,
) -> Result<()> {
    tokio::select! {
        res = janitor.restore(snapshots) => res?,
        _ = cancel.cancelled() => return Err(Cancelled.into()),
    };

    for snapshot in snapshots {
        println!("{snapshot}");
    }

    Ok(())
}
