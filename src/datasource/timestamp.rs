//! Canonical sync timestamps.
//!
//! Every `lastSyncAt` value passes through [`SyncTimestamp`] before it is
//! stored, so the directory only ever holds one textual representation:
//! RFC 3339 with an explicit numeric offset (`2026-02-16T08:30:00+00:00`).

use std::fmt;

use chrono::{DateTime, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Layouts with a numeric offset that RFC 3339 parsing does not cover
/// (compact `+hhmm` offsets, minute precision).
const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%dT%H:%M%z",
    "%Y-%m-%d %H:%M%:z",
    "%Y-%m-%d %H:%M%z",
];

/// Layouts for date-times that carry no offset, or a `Z` suffix. They are
/// read as UTC.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Errors produced while normalizing a timestamp
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimestampError {
    #[error("timestamp is empty")]
    Empty,

    #[error("'{0}' is not a valid ISO-8601 date-time")]
    Unparseable(String),
}

/// An ISO-8601 date-time in canonical string form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SyncTimestamp(String);

impl SyncTimestamp {
    /// Parse a raw ISO-8601 string and canonicalize it.
    ///
    /// Seconds may be omitted. Offsets are preserved (`Z` is rewritten as
    /// `+00:00`), fractional seconds are kept only when non-zero, and naive
    /// date-times are taken to be UTC. Parsing an already canonical value
    /// returns it unchanged.
    pub fn parse(raw: &str) -> Result<Self, TimestampError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TimestampError::Empty);
        }

        if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
            return Ok(Self::from(parsed));
        }

        if let Some(parsed) = OFFSET_FORMATS
            .iter()
            .find_map(|format| DateTime::parse_from_str(trimmed, format).ok())
        {
            return Ok(Self::from(parsed));
        }

        let naive = trimmed.strip_suffix(&['Z', 'z'][..]).unwrap_or(trimmed);
        NAIVE_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(naive, format).ok())
            .map(|naive| Self::from(naive.and_utc()))
            .ok_or_else(|| TimestampError::Unparseable(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<Tz> From<DateTime<Tz>> for SyncTimestamp
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    fn from(value: DateTime<Tz>) -> Self {
        Self(value.to_rfc3339())
    }
}

impl TryFrom<String> for SyncTimestamp {
    type Error = TimestampError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<SyncTimestamp> for String {
    fn from(value: SyncTimestamp) -> Self {
        value.0
    }
}

impl fmt::Display for SyncTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
