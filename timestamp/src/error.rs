use std::num::ParseIntError;

use thiserror::Error;

/// Errors returned by timestamp decoding and encoding.
#[derive(Debug, Error)]
pub enum TimestampError {
    #[error("timestamp: invalid number: {0}")]
    InvalidNumber(#[from] ParseIntError),

    #[error("timestamp: out of range: {secs}s {nanos}ns")]
    OutOfRange { secs: i64, nanos: i64 },

    #[error("timestamp: invalid blob: {0}")]
    InvalidBlob(&'static str),

    #[error("timestamp: element <{0}> not found")]
    ElementNotFound(String),

    #[error("timestamp: bson: {0}")]
    Bson(#[from] bson::de::Error),

    #[error("timestamp: msgpack encode: {0}")]
    MsgpackEncode(#[from] rmp_serde::encode::Error),

    #[error("timestamp: msgpack decode: {0}")]
    MsgpackDecode(#[from] rmp_serde::decode::Error),

    #[error("timestamp: xml: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("timestamp: element <{0}> not closed")]
    UnclosedElement(String),

    #[error("timestamp: utf-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

/// Result type for timestamp operations.
pub type Result<T> = std::result::Result<T, TimestampError>;
