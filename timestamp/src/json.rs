//! JSON number encoding.
//!
//! [`Timestamp`] serializes to Unix milliseconds. Deserialization accepts
//! either seconds or milliseconds: a token longer than [`MAX_SECONDS_DIGITS`]
//! characters is taken as milliseconds. The cutoff is a heuristic shared with
//! existing producers, so values near it are ambiguous (seconds past the year
//! 2286, milliseconds before 1973-03-03).

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::trace;

use crate::error::Result;
use crate::timestamp::Timestamp;

/// Longest token, sign included, still read as seconds.
pub const MAX_SECONDS_DIGITS: usize = 10;

impl Timestamp {
    /// Returns the JSON token for this timestamp: Unix milliseconds.
    pub fn to_json(&self) -> String {
        self.unix_millis().to_string()
    }

    /// Returns the legacy JSON token for this timestamp: Unix seconds.
    pub fn to_json_seconds(&self) -> String {
        self.unix().to_string()
    }

    /// Parses a raw JSON integer token holding Unix seconds or milliseconds.
    pub fn from_json(token: &[u8]) -> Result<Self> {
        let value = parse_int(token)?;
        from_token(value, token.len())
    }

    /// Parses a raw JSON integer token as Unix seconds, without the
    /// millisecond check.
    pub fn from_json_seconds(token: &[u8]) -> Result<Self> {
        Timestamp::try_from_unix(parse_int(token)?, 0)
    }
}

fn parse_int(token: &[u8]) -> Result<i64> {
    Ok(std::str::from_utf8(token)?.parse::<i64>()?)
}

fn from_token(value: i64, len: usize) -> Result<Timestamp> {
    if len > MAX_SECONDS_DIGITS {
        trace!(value, len, "timestamp: reading json token as milliseconds");
        return Timestamp::try_from_unix(value / 1000, 0);
    }
    Timestamp::try_from_unix(value, 0)
}

fn token_len(value: i64) -> usize {
    let sign = usize::from(value < 0);
    let digits = value.unsigned_abs().checked_ilog10().map_or(1, |n| n as usize + 1);
    sign + digits
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.unix_millis())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct TimestampVisitor;

        impl Visitor<'_> for TimestampVisitor {
            type Value = Timestamp;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an integer of Unix seconds or milliseconds")
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Self::Value, E> {
                from_token(v, token_len(v)).map_err(de::Error::custom)
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Self::Value, E> {
                let v = i64::try_from(v)
                    .map_err(|_| de::Error::invalid_value(de::Unexpected::Unsigned(v), &self))?;
                self.visit_i64(v)
            }
        }

        deserializer.deserialize_i64(TimestampVisitor)
    }
}
