//! Unix seconds field encoding, for use with `#[serde(with = "...")]`.
//!
//! This is the legacy JSON convention: the field is written as whole Unix
//! seconds and always read back as seconds, with no millisecond check.
//! Reading a value written by the millisecond encoder therefore yields a
//! timestamp a thousand times too far out. Text formats such as XML use the
//! same convention for element content.
//!
//! ```rust
//! use giztoy_timestamp::Timestamp;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Event {
//!     #[serde(with = "giztoy_timestamp::unix_seconds")]
//!     at: Timestamp,
//! }
//!
//! let ev = Event { at: Timestamp::from_unix(3000, 0) };
//! assert_eq!(serde_json::to_string(&ev).unwrap(), r#"{"at":3000}"#);
//! ```

use serde::de::Error;
use serde::{Deserialize, Deserializer, Serializer};

use crate::timestamp::Timestamp;

/// Writes `ts` as whole Unix seconds.
pub fn serialize<S: Serializer>(ts: &Timestamp, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_i64(ts.unix())
}

/// Reads whole Unix seconds.
pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Timestamp, D::Error> {
    let secs = i64::deserialize(deserializer)?;
    Timestamp::try_from_unix(secs, 0).map_err(D::Error::custom)
}

/// Same encoding for `Option<Timestamp>`; `None` maps to null.
pub mod option {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::timestamp::Timestamp;

    pub fn serialize<S: Serializer>(
        ts: &Option<Timestamp>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match ts {
            Some(ts) => serializer.serialize_some(&ts.unix()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Timestamp>, D::Error> {
        Option::<i64>::deserialize(deserializer)?
            .map(|secs| Timestamp::try_from_unix(secs, 0).map_err(D::Error::custom))
            .transpose()
    }
}
