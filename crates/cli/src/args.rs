//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Read every global option from its `ES_JANITOR_*` environment variable.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not validate values (see `es_config::ConfigLoader`).

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "es-janitor")]
#[command(about = "Snapshot and delete old Elasticsearch indices", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  es-janitor --endpoint http://localhost:9200 --repository backups --days 30\n  es-janitor --endpoint http://localhost:9200 --repository - eligible\n  es-janitor --endpoint http://localhost:9200 --repository backups restore index-logs-2018.11.21-on-2018-11-30T12:00:00Z\n"
)]
pub struct Cli {
    /// Indices older than this many days are archived
    #[arg(long, global = true, env = "ES_JANITOR_DAYS")]
    pub days: Option<u64>,

    /// Base URL of the Elasticsearch cluster (e.g., http://localhost:9200)
    #[arg(long, global = true, env = "ES_JANITOR_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Snapshot repository; use - to delete without snapshotting
    #[arg(long, global = true, env = "ES_JANITOR_REPOSITORY", allow_hyphen_values = true)]
    pub repository: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "ES_JANITOR_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Skip TLS certificate verification (for self-signed certificates)
    #[arg(long, global = true, env = "ES_JANITOR_SKIP_VERIFY")]
    pub skip_verify: bool,

    /// Username for HTTP basic authentication
    #[arg(long, global = true, env = "ES_JANITOR_USERNAME")]
    pub username: Option<String>,

    /// Password for HTTP basic authentication
    #[arg(long, global = true, env = "ES_JANITOR_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Export tracing spans to this OTLP gRPC endpoint (e.g., http://localhost:4317)
    #[arg(long, global = true, env = "ES_JANITOR_OTLP_ENDPOINT")]
    pub otlp_endpoint: Option<String>,

    /// Serve Prometheus metrics on this address (e.g., 127.0.0.1:9090)
    #[arg(long, global = true, env = "ES_JANITOR_METRICS_BIND")]
    pub metrics_bind: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Snapshot and delete indices older than --days (default)
    Archive,

    /// Print the indices that would be archived without changing anything
    Eligible,

    /// Restore snapshots from the repository
    Restore {
        /// Snapshot names to restore
        #[arg(required = true, value_name = "SNAPSHOT")]
        snapshots: Vec<String>,
    },
}

impl Cli {
    /// The subcommand to run, `archive` when none was given.
    pub fn resolved_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Archive)
    }
}
