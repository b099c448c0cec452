//! Time-of-day helpers and the backend wire time format.
//!
//! The backend serializes times of day as `HH:MM:SS` strings
//! (e.g. `"18:45:00"`). The [`wire_time`] and [`wire_time_option`] serde
//! modules apply that format to fields of wire records.

use chrono::NaiveTime;

/// Time of day within operating hours (no date, no timezone).
pub type ClockTime = NaiveTime;

/// Format used on the wire for [`ClockTime`] fields.
pub const WIRE_TIME_FORMAT: &str = "%H:%M:%S";

/// Parse a wire `HH:MM:SS` string into a [`ClockTime`].
///
/// # Errors
///
/// Returns a parse error when the string does not match the wire format.
pub fn parse_wire_time(s: &str) -> Result<ClockTime, chrono::ParseError> {
    NaiveTime::parse_from_str(s, WIRE_TIME_FORMAT)
}

/// Serde adapter for mandatory `HH:MM:SS` time fields.
pub mod wire_time {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    use super::WIRE_TIME_FORMAT;

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(WIRE_TIME_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, WIRE_TIME_FORMAT).map_err(D::Error::custom)
    }
}

/// Serde adapter for optional `HH:MM:SS` time fields.
///
/// Absent and `null` values both deserialize to `None`; `None` serializes
/// to `null` (callers typically also mark the field `skip_serializing_if`).
pub mod wire_time_option {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    use super::WIRE_TIME_FORMAT;

    pub fn serialize<S: Serializer>(
        time: &Option<NaiveTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match time {
            Some(t) => serializer.serialize_str(&t.format(WIRE_TIME_FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveTime>, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        raw.map(|s| NaiveTime::parse_from_str(&s, WIRE_TIME_FORMAT).map_err(D::Error::custom))
            .transpose()
    }
}
