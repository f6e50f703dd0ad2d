//! Centralized constants for the es-janitor workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default HTTP request timeout in seconds.
///
/// Snapshot and restore requests wait for the remote operation to complete,
/// so this is considerably longer than a typical API timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

// =============================================================================
// Retention Defaults
// =============================================================================

/// Default number of days of indices to keep.
pub const DEFAULT_RETENTION_DAYS: u64 = 32;

/// Maximum accepted retention window in days (~100 years).
pub const MAX_RETENTION_DAYS: u64 = 36_500;

/// Repository value that disables snapshotting before deletion.
pub const SKIP_SNAPSHOT_SENTINEL: &str = "-";

// =============================================================================
// Environment Variables
// =============================================================================

pub const ENV_ENDPOINT: &str = "ES_JANITOR_ENDPOINT";
pub const ENV_REPOSITORY: &str = "ES_JANITOR_REPOSITORY";
pub const ENV_DAYS: &str = "ES_JANITOR_DAYS";
pub const ENV_TIMEOUT: &str = "ES_JANITOR_TIMEOUT";
pub const ENV_SKIP_VERIFY: &str = "ES_JANITOR_SKIP_VERIFY";
pub const ENV_USERNAME: &str = "ES_JANITOR_USERNAME";
pub const ENV_PASSWORD: &str = "ES_JANITOR_PASSWORD";
