//! Timestamp CLI - converts timestamps between their wire encodings.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{DecodeCommand, EncodeCommand, NowCommand};

/// Timestamp CLI - converts timestamps between their wire encodings.
///
/// Supported formats:
///   - json: Unix milliseconds (decodes seconds too)
///   - json-seconds: Unix seconds
///   - bson: BSON date as relaxed extended JSON
///   - blob: binary payload as hex
///   - xml: element text holding Unix seconds
#[derive(Parser)]
#[command(name = "timestamp")]
#[command(about = "Timestamp encoding CLI tool")]
#[command(version)]
pub struct Cli {
    /// XML element name
    #[arg(long, global = true, default_value = "t")]
    pub tag: String,

    /// Output as JSON (for piping)
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the current time
    Now(NowCommand),
    /// Encode Unix seconds
    Encode(EncodeCommand),
    /// Decode an encoded timestamp
    Decode(DecodeCommand),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new("giztoy_timestamp=trace,timestamp=debug"))
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }

    match &cli.command {
        Commands::Now(cmd) => cmd.run(&cli),
        Commands::Encode(cmd) => cmd.run(&cli),
        Commands::Decode(cmd) => cmd.run(&cli),
    }
}
