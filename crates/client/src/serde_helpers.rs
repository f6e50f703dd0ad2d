//! Serde helpers for `_cat` API payloads.
//!
//! `_cat/indices?format=json` reports `null` for columns it cannot compute,
//! e.g. `health` and `store.size` of a closed index.

use serde::{Deserialize, Deserializer};

/// Deserialize a string column, reading `null` as the empty string.
///
/// Pair with `#[serde(default)]` so a missing key behaves the same way.
pub fn string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
