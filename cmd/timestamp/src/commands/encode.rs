//! Encoding commands.

use clap::Args;
use giztoy_timestamp::Timestamp;
use tracing::debug;

use super::{Format, encode_as};
use crate::Cli;

/// Print the current time in a wire encoding.
#[derive(Args)]
pub struct NowCommand {
    /// Output format
    #[arg(short = 'F', long, value_enum, default_value_t = Format::Json)]
    format: Format,
}

impl NowCommand {
    pub fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        let ts = Timestamp::now();
        debug!(%ts, format = ?self.format, "encoding current time");
        println!("{}", encode_as(&ts, self.format, cli)?);
        Ok(())
    }
}

/// Encode Unix seconds in a wire encoding.
#[derive(Args)]
pub struct EncodeCommand {
    /// Output format
    #[arg(short = 'F', long, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// Nanoseconds added to the seconds
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    nanos: i64,

    /// Unix seconds
    #[arg(allow_hyphen_values = true)]
    secs: i64,
}

impl EncodeCommand {
    pub fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        let ts = Timestamp::try_from_unix(self.secs, self.nanos)?;
        debug!(%ts, format = ?self.format, "encoding timestamp");
        println!("{}", encode_as(&ts, self.format, cli)?);
        Ok(())
    }
}
