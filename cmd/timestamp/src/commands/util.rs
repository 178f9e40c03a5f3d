//! Utility functions for CLI commands.

use clap::ValueEnum;
use giztoy_timestamp::{Timestamp, is_valid_epoch};
use serde::Serialize;

use crate::Cli;

/// Wire encodings understood by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Unix milliseconds; decoding also accepts seconds
    Json,
    /// Unix seconds
    JsonSeconds,
    /// BSON date as relaxed extended JSON
    Bson,
    /// Binary payload as hex
    Blob,
    /// XML element text
    Xml,
}

/// Encodes `ts` in the given format.
pub fn encode_as(ts: &Timestamp, format: Format, cli: &Cli) -> anyhow::Result<String> {
    let out = match format {
        Format::Json => ts.to_json(),
        Format::JsonSeconds => ts.to_json_seconds(),
        Format::Bson => ts.to_bson().into_relaxed_extjson().to_string(),
        Format::Blob => hex::encode(ts.to_blob()?),
        Format::Xml => ts.to_xml(&cli.tag)?,
    };
    Ok(out)
}

/// Decodes `input` from the given format.
pub fn decode_from(input: &str, format: Format, cli: &Cli) -> anyhow::Result<Timestamp> {
    let input = input.trim();
    let ts = match format {
        Format::Json => Timestamp::from_json(input.as_bytes())?,
        Format::JsonSeconds => Timestamp::from_json_seconds(input.as_bytes())?,
        Format::Bson => {
            let value: serde_json::Value = serde_json::from_str(input)?;
            Timestamp::from_bson(bson::Bson::try_from(value)?)?
        }
        Format::Blob => Timestamp::from_blob(&hex::decode(input)?)?,
        Format::Xml => Timestamp::from_xml(input, &cli.tag)?,
    };
    Ok(ts)
}

/// Summary of a decoded timestamp.
#[derive(Debug, Serialize)]
pub struct Report {
    pub unix: i64,
    pub unix_millis: i64,
    pub time: String,
    pub empty: bool,
    pub valid_epoch: bool,
}

impl From<&Timestamp> for Report {
    fn from(ts: &Timestamp) -> Self {
        Self {
            unix: ts.unix(),
            unix_millis: ts.unix_millis(),
            time: ts.to_string(),
            empty: ts.is_empty(),
            valid_epoch: is_valid_epoch(ts.unix()),
        }
    }
}

/// Prints a report as JSON or as aligned text.
pub fn output_report(report: &Report, as_json: bool) -> anyhow::Result<()> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    println!("unix:        {}", report.unix);
    println!("unix_millis: {}", report.unix_millis);
    println!("time:        {}", report.time);
    println!("empty:       {}", report.empty);
    println!("valid_epoch: {}", report.valid_epoch);
    Ok(())
}
