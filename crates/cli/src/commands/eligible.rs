//! Eligible command implementation: a dry run of `archive`.

use anyhow::Result;
use es_client::SearchEngine;
use es_janitor::Janitor;

use crate::cancellation::{CancellationToken, Cancelled};

pub async fn run<E: SearchEngine>(
    janitor: &Janitor<E>,
    days: u64,
    cancel: &CancellationToken,
) -> Result<()> {
    let eligible = tokio::select! {
        res = janitor.archive_eligible_indices(days) => res?,
        _ = cancel.cancelled() => return Err(Cancelled.into()),
    };

    for index in eligible {
        println!("{}", index.name);
    }

    Ok(())
}
