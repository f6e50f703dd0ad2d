//! Configuration loader for `.env` files, environment variables and overrides.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for layered configuration merging.
//! - Enforce the `DOTENV_DISABLED` gate to prevent accidental dotenv loading in tests.
//! - Validate the merged values before handing out a [`crate::Config`].
//!
//! Does NOT handle:
//! - Command-line parsing (see the cli crate, which feeds overrides in via `with_*`).
//!
//! Invariants / Assumptions:
//! - Builder methods take precedence over environment variables.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

mod builder;
mod env;
mod error;

pub use builder::ConfigLoader;
pub use env::env_var_or_none;
pub use error::ConfigError;

#[cfg(test)]
mod tests;
