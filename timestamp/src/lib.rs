//! Unix timestamp type with several wire encodings.
//!
//! [`Timestamp`] wraps a `chrono` instant and converts it to and from the
//! integer epoch conventions other systems use:
//!
//! - JSON: Unix milliseconds via `Serialize`/`Deserialize`. Decoding also
//!   accepts Unix seconds (tokens of up to 10 characters).
//! - [`unix_seconds`]: the legacy JSON convention, Unix seconds both ways.
//!   Also the text of XML elements.
//! - [`bson_datetime`]: BSON `DateTime`, or `Null` when the timestamp is empty.
//! - [`blob`]: fixed-size binary payload keeping nanoseconds and the offset.
//! - XML: [`Timestamp::to_xml`] / [`Timestamp::from_xml`].
//!
//! # Example
//!
//! ```rust
//! use giztoy_timestamp::Timestamp;
//!
//! let ts = Timestamp::from_unix(3000, 0);
//! assert_eq!(serde_json::to_string(&ts).unwrap(), "3000000");
//!
//! // Seconds and milliseconds both decode.
//! let a: Timestamp = serde_json::from_str("3000").unwrap();
//! let b: Timestamp = serde_json::from_str("1529065200999").unwrap();
//! assert_eq!(a.unix(), 3000);
//! assert_eq!(b.unix(), 1529065200);
//!
//! assert_eq!(ts.to_xml("t").unwrap(), "<t>3000</t>");
//! assert!(Timestamp::default().is_empty());
//! ```

mod epoch;
mod error;
mod json;
mod timestamp;
mod xml;

pub mod blob;
pub mod bson_datetime;
pub mod unix_seconds;

pub use epoch::{DEFAULT_MAX_FUTURE_YEARS, EpochWindow, is_valid_epoch, is_valid_epoch_at};
pub use error::{Result, TimestampError};
pub use json::MAX_SECONDS_DIGITS;
pub use timestamp::{Timestamp, is_empty};
