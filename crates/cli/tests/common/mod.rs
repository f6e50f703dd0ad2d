//! Shared test utilities for es-janitor integration tests.
//!
//! Invariants / Assumptions:
//! - Commands are hermetic: no `.env` loading and no `ES_JANITOR_*` leakage
//!   from the host.

use assert_cmd::Command;

/// Every variable the binary reads.
pub const ENV_VARS: &[&str] = &[
    "ES_JANITOR_DAYS",
    "ES_JANITOR_ENDPOINT",
    "ES_JANITOR_REPOSITORY",
    "ES_JANITOR_TIMEOUT",
    "ES_JANITOR_SKIP_VERIFY",
    "ES_JANITOR_USERNAME",
    "ES_JANITOR_PASSWORD",
    "ES_JANITOR_OTLP_ENDPOINT",
    "ES_JANITOR_METRICS_BIND",
];

/// Returns a hermetic `es-janitor` command.
pub fn janitor_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("es-janitor");

    cmd.env("DOTENV_DISABLED", "1");
    cmd.env("RUST_LOG", "warn");
    for var in ENV_VARS {
        cmd.env_remove(var);
    }

    cmd
}

/// Returns a hermetic command pointed at `endpoint` with `repository`.
#[allow(dead_code)]
pub fn janitor_cmd_for(endpoint: &str, repository: &str) -> Command {
    let mut cmd = janitor_cmd();
    cmd.env("ES_JANITOR_ENDPOINT", endpoint)
        .env("ES_JANITOR_REPOSITORY", repository);
    cmd
}

/// A `_cat/indices` listing with the given names.
#[allow(dead_code)]
pub fn listing(names: &[&str]) -> serde_json::Value {
    serde_json::Value::Array(
        names
            .iter()
            .map(|name| {
                serde_json::json!({
                    "health": "green",
                    "status": "open",
                    "index": name,
                    "uuid": format!("uuid-{name}"),
                    "store.size": "1kb"
                })
            })
            .collect(),
    )
}
