//! Binary encoding.
//!
//! The payload is the common fixed-size time binary layout:
//!
//! ```text
//! byte 0       version (1, or 2 when the offset has a seconds part)
//! bytes 1..9   seconds since 0001-01-01T00:00:00Z, i64 big-endian
//! bytes 9..13  nanoseconds, i32 big-endian
//! bytes 13..15 offset in minutes east of UTC, i16 big-endian; -1 is UTC
//! byte 15      offset seconds, i8 (version 2 only)
//! ```
//!
//! Nanoseconds and the UTC offset survive a round trip. As a field adapter
//! (`#[serde(with = "...")]`) the payload is written with `serialize_bytes`,
//! which binary formats frame with a length prefix. [`to_vec`] and
//! [`from_slice`] produce such a frame on their own using MessagePack.

use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Result, TimestampError};
use crate::timestamp::Timestamp;

/// Payload version with a whole-minute zone offset.
pub const VERSION_V1: u8 = 1;
/// Payload version carrying an extra offset seconds byte.
pub const VERSION_V2: u8 = 2;

/// Payload length for [`VERSION_V1`]; [`VERSION_V2`] adds one byte.
pub const LEN_V1: usize = 15;

/// Seconds from 0001-01-01T00:00:00Z to the Unix epoch.
const UNIX_TO_INTERNAL: i64 = 62_135_596_800;

const UTC_OFFSET_MIN: i16 = -1;

impl Timestamp {
    /// Encodes the timestamp into its binary payload.
    pub fn to_blob(&self) -> Result<Vec<u8>> {
        let dt = self.datetime();

        let offset = dt.offset().local_minus_utc();
        let mut version = VERSION_V1;
        let mut offset_sec: i8 = 0;
        let offset_min = if offset == 0 {
            UTC_OFFSET_MIN
        } else {
            if offset % 60 != 0 {
                version = VERSION_V2;
                offset_sec = (offset % 60) as i8;
            }
            let minutes = offset / 60;
            if minutes == -1 {
                return Err(TimestampError::InvalidBlob("unexpected zone offset"));
            }
            i16::try_from(minutes)
                .map_err(|_| TimestampError::InvalidBlob("unexpected zone offset"))?
        };

        let secs = dt
            .timestamp()
            .checked_add(UNIX_TO_INTERNAL)
            .ok_or(TimestampError::InvalidBlob("seconds overflow"))?;
        let nanos = dt.timestamp_subsec_nanos() as i32;

        let mut buf = Vec::with_capacity(LEN_V1 + 1);
        buf.push(version);
        buf.extend_from_slice(&secs.to_be_bytes());
        buf.extend_from_slice(&nanos.to_be_bytes());
        buf.extend_from_slice(&offset_min.to_be_bytes());
        if version == VERSION_V2 {
            buf.push(offset_sec as u8);
        }
        Ok(buf)
    }

    /// Decodes a binary payload written by [`Timestamp::to_blob`].
    pub fn from_blob(buf: &[u8]) -> Result<Self> {
        let Some(&version) = buf.first() else {
            return Err(TimestampError::InvalidBlob("no data"));
        };
        let want = match version {
            VERSION_V1 => LEN_V1,
            VERSION_V2 => LEN_V1 + 1,
            _ => return Err(TimestampError::InvalidBlob("unsupported version")),
        };
        if buf.len() != want {
            return Err(TimestampError::InvalidBlob("invalid length"));
        }

        let secs = i64::from_be_bytes([
            buf[1], buf[2], buf[3], buf[4], buf[5], buf[6], buf[7], buf[8],
        ]);
        let nanos = i32::from_be_bytes([buf[9], buf[10], buf[11], buf[12]]);
        let offset_min = i16::from_be_bytes([buf[13], buf[14]]);

        if nanos < 0 {
            return Err(TimestampError::InvalidBlob("negative nanoseconds"));
        }
        let unix = secs
            .checked_sub(UNIX_TO_INTERNAL)
            .ok_or(TimestampError::InvalidBlob("seconds overflow"))?;
        let utc = DateTime::from_timestamp(unix, nanos as u32).ok_or(
            TimestampError::OutOfRange {
                secs: unix,
                nanos: nanos.into(),
            },
        )?;

        if offset_min == UTC_OFFSET_MIN {
            return Ok(Timestamp::new(utc));
        }
        let mut offset = i32::from(offset_min) * 60;
        if version == VERSION_V2 {
            offset += i32::from(buf[15] as i8);
        }
        let tz = FixedOffset::east_opt(offset)
            .ok_or(TimestampError::InvalidBlob("zone offset out of range"))?;
        Ok(Timestamp::new(utc.with_timezone(&tz)))
    }
}

/// Encodes `ts` as a standalone length-prefixed MessagePack `bin` value.
pub fn to_vec(ts: &Timestamp) -> Result<Vec<u8>> {
    Ok(rmp_serde::to_vec(&Framed(*ts))?)
}

/// Decodes a value written by [`to_vec`].
pub fn from_slice(buf: &[u8]) -> Result<Timestamp> {
    let framed: Framed = rmp_serde::from_slice(buf)?;
    Ok(framed.0)
}

struct Framed(Timestamp);

impl Serialize for Framed {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serialize(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for Framed {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserialize(deserializer).map(Framed)
    }
}

/// Writes `ts` as a binary payload with `serialize_bytes`.
pub fn serialize<S: Serializer>(
    ts: &Timestamp,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    let payload = ts.to_blob().map_err(serde::ser::Error::custom)?;
    serializer.serialize_bytes(&payload)
}

/// Reads a binary payload from bytes or a byte sequence.
pub fn deserialize<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Timestamp, D::Error> {
    struct BlobVisitor;

    impl<'de> Visitor<'de> for BlobVisitor {
        type Value = Timestamp;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a binary timestamp payload")
        }

        fn visit_bytes<E: de::Error>(self, v: &[u8]) -> std::result::Result<Self::Value, E> {
            Timestamp::from_blob(v).map_err(de::Error::custom)
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error> {
            let mut buf = Vec::with_capacity(LEN_V1 + 1);
            while let Some(b) = seq.next_element::<u8>()? {
                buf.push(b);
            }
            Timestamp::from_blob(&buf).map_err(de::Error::custom)
        }
    }

    deserializer.deserialize_bytes(BlobVisitor)
}
