//! BSON date encoding.
//!
//! A non-empty timestamp becomes a BSON `DateTime` (millisecond precision).
//! An empty one becomes `Null`, so readers can tell "never set" from a real
//! date. Decoding goes through `bson`'s own `DateTime` deserializer; `Null`
//! reads back as the unset timestamp.
//!
//! The module doubles as a field adapter for `#[serde(with = "...")]` with
//! `bson::to_document` / `bson::from_document`.

use bson::Bson;
use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::trace;

use crate::error::Result;
use crate::timestamp::Timestamp;

impl Timestamp {
    /// Returns the BSON value for this timestamp, `Null` when empty.
    pub fn to_bson(&self) -> Bson {
        match bson_date(self) {
            Some(dt) => Bson::DateTime(dt),
            None => Bson::Null,
        }
    }

    /// Decodes a BSON value written by [`Timestamp::to_bson`].
    pub fn from_bson(value: Bson) -> Result<Self> {
        let dt: Option<bson::DateTime> = bson::from_bson(value)?;
        Ok(dt.map(from_bson_date).transpose()?.unwrap_or_default())
    }
}

fn bson_date(ts: &Timestamp) -> Option<bson::DateTime> {
    if ts.is_empty() {
        trace!("timestamp: empty value written as bson null");
        return None;
    }
    Some(bson::DateTime::from_millis(ts.datetime_utc().timestamp_millis()))
}

fn from_bson_date(dt: bson::DateTime) -> Result<Timestamp> {
    let ms = dt.timestamp_millis();
    Timestamp::try_from_unix(ms.div_euclid(1000), ms.rem_euclid(1000) * 1_000_000)
}

/// Writes `ts` as a BSON date, or null when empty.
pub fn serialize<S: Serializer>(ts: &Timestamp, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    match bson_date(ts) {
        Some(dt) => dt.serialize(serializer),
        None => serializer.serialize_none(),
    }
}

/// Reads a BSON date; null yields the unset timestamp.
pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Timestamp, D::Error> {
    let dt = Option::<bson::DateTime>::deserialize(deserializer)?;
    let ts = dt.map(from_bson_date).transpose().map_err(D::Error::custom)?;
    Ok(ts.unwrap_or_default())
}
