//! The timestamp value type.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::time::SystemTime;

use chrono::{DateTime, FixedOffset, TimeZone, Utc};

use crate::error::{Result, TimestampError};

const NANOS_PER_SEC: i64 = 1_000_000_000;
const NANOS_PER_MILLI: i128 = 1_000_000;

/// A point in time that encodes to/from Unix seconds or milliseconds.
///
/// `Timestamp::default()` is the unset value. It is never exposed as-is:
/// every accessor sees it as the Unix epoch, and it counts as empty just like
/// an explicit epoch 0. Equality, ordering and hashing follow the instant
/// returned by [`Timestamp::datetime`], so the two compare equal.
#[derive(Debug, Clone, Copy, Default)]
pub struct Timestamp(Option<DateTime<FixedOffset>>);

impl Timestamp {
    /// Wraps an existing instant, keeping its offset.
    pub fn new<Tz: TimeZone>(dt: DateTime<Tz>) -> Self {
        Self(Some(dt.fixed_offset()))
    }

    /// Returns the current time.
    pub fn now() -> Self {
        Self::new(Utc::now())
    }

    /// Creates a UTC timestamp from Unix seconds and nanoseconds.
    ///
    /// Nanoseconds outside `[0, 1e9)` carry into the seconds. Values chrono
    /// cannot represent yield the empty timestamp; use
    /// [`Timestamp::try_from_unix`] to get an error instead.
    pub fn from_unix(secs: i64, nanos: i64) -> Self {
        Self::try_from_unix(secs, nanos).unwrap_or_default()
    }

    /// Creates a UTC timestamp from Unix seconds and nanoseconds, failing
    /// when the instant is out of range.
    pub fn try_from_unix(secs: i64, nanos: i64) -> Result<Self> {
        let out_of_range = || TimestampError::OutOfRange { secs, nanos };

        let carry = nanos.div_euclid(NANOS_PER_SEC);
        let sub = nanos.rem_euclid(NANOS_PER_SEC) as u32;
        let secs_norm = secs.checked_add(carry).ok_or_else(out_of_range)?;

        DateTime::from_timestamp(secs_norm, sub)
            .map(Self::new)
            .ok_or_else(out_of_range)
    }

    /// Creates a UTC timestamp from Unix milliseconds.
    ///
    /// The value is divided by 1000 truncating toward zero; the millisecond
    /// remainder is dropped.
    pub fn from_millis(ms: i64) -> Self {
        Self::from_unix(ms / 1000, 0)
    }

    /// Like [`Timestamp::from_millis`], failing when out of range.
    pub fn try_from_millis(ms: i64) -> Result<Self> {
        Self::try_from_unix(ms / 1000, 0)
    }

    /// Returns the underlying instant, or the Unix epoch for the unset value.
    pub fn datetime(&self) -> DateTime<FixedOffset> {
        self.0.unwrap_or_else(|| DateTime::<Utc>::UNIX_EPOCH.fixed_offset())
    }

    /// Returns the underlying instant converted to UTC.
    pub fn datetime_utc(&self) -> DateTime<Utc> {
        self.datetime().with_timezone(&Utc)
    }

    /// Returns the Unix seconds value.
    pub fn unix(&self) -> i64 {
        self.datetime().timestamp()
    }

    /// Returns the Unix milliseconds value: nanoseconds since the epoch
    /// divided by one million, truncated toward zero.
    pub fn unix_millis(&self) -> i64 {
        let dt = self.datetime();
        let nanos = dt.timestamp() as i128 * NANOS_PER_SEC as i128
            + dt.timestamp_subsec_nanos() as i128;
        (nanos / NANOS_PER_MILLI) as i64
    }

    /// Reports whether this is the unset value or exactly the Unix epoch.
    pub fn is_empty(&self) -> bool {
        match self.0 {
            None => true,
            Some(dt) => dt.timestamp() == 0 && dt.timestamp_subsec_nanos() == 0,
        }
    }
}

/// Reports whether `ts` is absent, unset, or exactly the Unix epoch.
pub fn is_empty(ts: Option<&Timestamp>) -> bool {
    ts.is_none_or(Timestamp::is_empty)
}

impl PartialEq for Timestamp {
    fn eq(&self, other: &Self) -> bool {
        self.datetime() == other.datetime()
    }
}

impl Eq for Timestamp {}

impl PartialOrd for Timestamp {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Timestamp {
    fn cmp(&self, other: &Self) -> Ordering {
        self.datetime().cmp(&other.datetime())
    }
}

impl Hash for Timestamp {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.datetime().hash(state);
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.datetime())
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Timestamp {
    fn from(dt: DateTime<Tz>) -> Self {
        Self::new(dt)
    }
}

impl From<SystemTime> for Timestamp {
    fn from(t: SystemTime) -> Self {
        Self::new(DateTime::<Utc>::from(t))
    }
}

impl From<Timestamp> for DateTime<FixedOffset> {
    fn from(ts: Timestamp) -> Self {
        ts.datetime()
    }
}

impl From<Timestamp> for DateTime<Utc> {
    fn from(ts: Timestamp) -> Self {
        ts.datetime_utc()
    }
}
