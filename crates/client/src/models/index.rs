//! Index listing entries and name-embedded creation dates.
//!
//! Index names follow the `<prefix>-<semver>-<YYYY.MM.DD>` convention. The
//! creation date is derived from the trailing three dot-separated numeric
//! groups and is never stored.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::serde_helpers::string_or_null;

static TRAILING_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+\.[0-9]+\.[0-9]+$").expect("valid date pattern"));

/// Errors raised when an index name does not carry a usable date.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IndexDateError {
    #[error("unable to find date from index name: {name}")]
    DateNotFound { name: String },

    #[error("invalid date '{value}' in index name: {name}")]
    DateParse { name: String, value: String },
}

/// A single entry of `GET /_cat/indices?format=json`.
///
/// Only the name is required. Other columns may be absent or `null` (closed
/// indices report no health or size) and then read as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Index {
    #[serde(default, deserialize_with = "string_or_null")]
    pub uuid: String,
    #[serde(rename = "index")]
    pub name: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub state: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub health: String,
    #[serde(rename = "store.size", default, deserialize_with = "string_or_null")]
    pub store_size: String,
}

impl Index {
    /// Create an index entry carrying only a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Creation date embedded in the index name, at midnight UTC.
    pub fn date_from_name(&self) -> Result<DateTime<Utc>, IndexDateError> {
        date_from_index_name(&self.name)
    }
}

/// Extract the trailing `YYYY.MM.DD` date from an index name.
///
/// For `filebeat-6.4.3-2018.11.21` the result is 2018-11-21T00:00:00Z. The
/// last three numeric groups are always read as the date, so
/// `6.4.3.2018.11.21` also yields 2018-11-21.
pub fn date_from_index_name(name: &str) -> Result<DateTime<Utc>, IndexDateError> {
    let value = TRAILING_DATE
        .find(name)
        .map(|m| m.as_str())
        .ok_or_else(|| IndexDateError::DateNotFound {
            name: name.to_string(),
        })?;

    let parse_error = || IndexDateError::DateParse {
        name: name.to_string(),
        value: value.to_string(),
    };

    // chrono's %Y/%m/%d accept variable widths, so enforce 4/2/2 first.
    let widths: Vec<usize> = value.split('.').map(str::len).collect();
    if widths != [4, 2, 2] {
        return Err(parse_error());
    }

    let date = NaiveDate::parse_from_str(value, "%Y.%m.%d").map_err(|_| parse_error())?;
    Ok(date.and_time(NaiveTime::MIN).and_utc())
}
