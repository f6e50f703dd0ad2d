//! Archive command implementation.

use anyhow::Result;
use es_client::SearchEngine;
use es_janitor::Janitor;
use tracing::info;

use crate::cancellation::{CancellationToken, Cancelled};

pub async fn run<E: SearchEngine>(
    janitor: &Janitor<E>,
    days: u64,
    cancel: &CancellationToken,
) -> Result<()> {
    info!(days, repository = %janitor.repository(), "Archiving old indices");

    let archived = tokio::select! {
        res = janitor.archive_older_than(days) => res?,
        _ = cancel.cancelled() => return Err(Cancelled.into()),
    };

    for index in &archived {
        match &index.snapshot {
            Some(snapshot) => println!("{}\t{}", index.name, snapshot),
            None => println!("{}\t-", index.name),
        }
    }
    info!(archived = archived.len(), "Archive run complete");

    Ok(())
}
