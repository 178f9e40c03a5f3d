//! Decoding command.

use std::io::Read;

use clap::Args;
use tracing::debug;

use super::{Format, Report, decode_from, output_report};
use crate::Cli;

/// Decode a timestamp and print its Unix values.
#[derive(Args)]
pub struct DecodeCommand {
    /// Input format
    #[arg(short = 'F', long, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// Encoded timestamp (default: read from stdin)
    #[arg(allow_hyphen_values = true)]
    input: Option<String>,
}

impl DecodeCommand {
    pub fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        let input = match &self.input {
            Some(input) => input.clone(),
            None => {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                buf
            }
        };

        let ts = decode_from(&input, self.format, cli)?;
        debug!(%ts, format = ?self.format, "decoded timestamp");
        output_report(&Report::from(&ts), cli.json)
    }
}
