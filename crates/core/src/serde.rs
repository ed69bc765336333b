//! Serde helper functions for event timestamps.
//!
//! Timestamps arrive either as full RFC 3339 strings (`2019-07-10T22:55:56.845Z`)
//! or as the shorter local form emitted by the edit form (`2019-07-10T22:55`).
//! Both are normalised to a `NaiveDateTime`.

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serializer};

const SHORT_FORMAT: &str = "%Y-%m-%dT%H:%M";
const SECONDS_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Parses a timestamp in any of the accepted formats.
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.naive_utc())
        .ok()
        .or_else(|| NaiveDateTime::parse_from_str(s, SECONDS_FORMAT).ok())
        .or_else(|| NaiveDateTime::parse_from_str(s, SHORT_FORMAT).ok())
}

/// Serialize a timestamp as `YYYY-MM-DDTHH:MM:SS`.
pub fn serialize_timestamp<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.format(SECONDS_FORMAT).to_string())
}

/// Deserialize a timestamp, accepting RFC 3339 or local `YYYY-MM-DDTHH:MM[:SS]`.
pub fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_timestamp(&s)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {s}")))
}
