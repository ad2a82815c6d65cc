//! Command-line arguments for `currency-input`.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `mask` | Normalize and mask one-off raw inputs |
//! | `replay` | Replay a scripted session of field events |
//!
//! Flags override `CURRENCY_INPUT_CONFIG` and `CURRENCY_INPUT_CURRENCY`.
//!
//! ```bash
//! currency-input mask 205 20050 --currency USD
//! currency-input mask --numeric 5 2.5
//! currency-input replay session.json
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "currency-input",
    version,
    about = "Currency input normalization and display masking"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print `<value>\t<masked>` for each raw input.
    Mask(MaskArgs),
    /// Replay a JSON session file and print the callback transcript.
    Replay(ReplayArgs),
}

/// Options shared by every command.
#[derive(Debug, Clone, Args)]
pub struct FormatArgs {
    /// Path to a format configuration JSON document.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// ISO 4217 currency code to format with.
    #[arg(long)]
    pub currency: Option<String>,

    /// Replace a currency code in the output, as `CODE=TOKEN`.
    #[arg(long = "override", value_name = "CODE=TOKEN", value_parser = parse_override)]
    pub overrides: Vec<(String, String)>,
}

#[derive(Debug, Args)]
pub struct MaskArgs {
    #[command(flatten)]
    pub format: FormatArgs,

    /// Read inputs as numbers instead of field text.
    #[arg(long)]
    pub numeric: bool,

    /// Raw inputs to normalize.
    #[arg(required = true, allow_hyphen_values = true)]
    pub inputs: Vec<String>,
}

#[derive(Debug, Args)]
pub struct ReplayArgs {
    #[command(flatten)]
    pub format: FormatArgs,

    /// Session file to replay.
    pub session: PathBuf,
}

fn parse_override(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((code, token)) if !code.trim().is_empty() => {
            Ok((code.trim().to_uppercase(), token.to_string()))
        }
        _ => Err(format!("expected CODE=TOKEN, got '{raw}'")),
    }
}
