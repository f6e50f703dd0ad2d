//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route the parsed subcommand to its handler.
//! - Build the janitor shared by all handlers.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Configuration loading (see `main()`).

use anyhow::Result;
use es_client::MetricsCollector;
use es_config::Config;

use crate::args::Commands;
use crate::cancellation::CancellationToken;
use crate::commands;

pub(crate) async fn run_command(
    command: Commands,
    config: Config,
    metrics: Option<MetricsCollector>,
    cancel_token: &CancellationToken,
) -> Result<()> {
    let janitor = commands::build_janitor(&config, metrics)?;
    let days = config.retention.days;

    match command {
        Commands::Archive => commands::archive::run(&janitor, days, cancel_token).await,
        Commands::Eligible => commands::eligible::run(&janitor, days, cancel_token).await,
        Commands::Restore { snapshots } => {
            commands::restore::run(&janitor, &snapshots, cancel_token).await
        }
    }
}
