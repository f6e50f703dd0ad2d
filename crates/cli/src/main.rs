//! es-janitor - snapshot and delete old Elasticsearch indices.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Initialize logging, optional OTLP tracing and the optional metrics exporter.
//! - Run the selected subcommand and map failures to structured exit codes.
//!
//! Does NOT handle:
//! - Retention decisions (see `crates/janitor`).
//! - REST API implementation (see `crates/client`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing to allow `.env` to provide clap defaults.
//! - Configuration is fully validated before any remote call.

mod args;
mod cancellation;
mod commands;
mod dispatch;
mod error;

use std::time::Duration;

use args::Cli;
use cancellation::{CancellationToken, is_cancelled_error, print_cancelled_message};
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use es_client::{MetricsCollector, MetricsExporter, TracingConfig};
use es_config::{Config, ConfigError, ConfigLoader};

#[tokio::main]
async fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::ConfigurationError.as_i32());
    }

    let cli = Cli::parse();

    let mut tracing_config = TracingConfig::new().with_service_version(env!("CARGO_PKG_VERSION"));
    if let Some(ref endpoint) = cli.otlp_endpoint {
        tracing_config = tracing_config.with_otlp_endpoint(endpoint);
    }
    let tracing_guard = match tracing_config.init() {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize tracing: {}", e);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };
    tracing::debug!(
        otlp = tracing_guard.is_exporting(),
        version = env!("CARGO_PKG_VERSION"),
        "Tracing initialized"
    );

    let config = match build_config(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to build configuration: {:#}", e);
            tracing_guard.shutdown();
            std::process::exit(ExitCode::ConfigurationError.as_i32());
        }
    };

    let metrics = match cli.metrics_bind.as_deref() {
        Some(bind_addr) => match MetricsExporter::install(bind_addr) {
            Ok(_) => Some(MetricsCollector::new()),
            Err(e) => {
                eprintln!("Failed to start metrics exporter: {}", e);
                tracing_guard.shutdown();
                std::process::exit(ExitCode::GeneralError.as_i32());
            }
        },
        None => None,
    };

    let cancel = CancellationToken::new();
    let cancel_clone = cancel.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            eprintln!("Failed to listen for Ctrl+C: {}", e);
            return;
        }
        cancel_clone.cancel();
    });

    let exit_code = match run_command(cli.resolved_command(), config, metrics, &cancel).await {
        Ok(()) => ExitCode::Success,
        Err(e) if is_cancelled_error(&e) => {
            print_cancelled_message();
            ExitCode::Interrupted
        }
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    tracing_guard.shutdown();

    std::process::exit(exit_code.as_i32());
}

/// Layer environment variables, then CLI overrides, and validate.
fn build_config(cli: &Cli) -> Result<Config, ConfigError> {
    let mut loader = ConfigLoader::new().from_env()?;

    if let Some(ref endpoint) = cli.endpoint {
        loader = loader.with_endpoint(endpoint.clone());
    }
    if let Some(ref repository) = cli.repository {
        loader = loader.with_repository(repository.clone());
    }
    if let Some(days) = cli.days {
        loader = loader.with_days(days);
    }
    if let Some(timeout_secs) = cli.timeout {
        loader = loader.with_timeout(Duration::from_secs(timeout_secs));
    }
    if cli.skip_verify {
        loader = loader.with_skip_verify(true);
    }
    if let Some(ref username) = cli.username {
        loader = loader.with_username(username.clone());
    }
    if let Some(ref password) = cli.password {
        loader = loader.with_password(password.clone());
    }

    loader.build()
}
