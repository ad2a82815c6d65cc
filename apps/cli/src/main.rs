mod cli;
mod config;
mod main_lib;
mod session;

use std::str::FromStr;

use anyhow::Context;
use clap::Parser;
use currency_input_core::{CurrencyInput, CurrencyInputOptions, RawInput, TextField};
use rust_decimal::Decimal;

use crate::cli::{Cli, Command, FormatArgs, MaskArgs, ReplayArgs};
use crate::config::Config;
use crate::main_lib::{init_tracing, load_format_config};

fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    init_tracing(&config.log_format);
    let cli = Cli::parse();

    let lines = match cli.command {
        Command::Mask(args) => run_mask(&config, args)?,
        Command::Replay(args) => run_replay(&config, args)?,
    };
    for line in lines {
        println!("{line}");
    }
    Ok(())
}

/// Layers command-line flags over the environment and over whatever the
/// caller already set on `options`.
fn apply_format_args(
    config: &Config,
    args: &FormatArgs,
    mut options: CurrencyInputOptions,
) -> anyhow::Result<CurrencyInputOptions> {
    let config_path = args.config.as_deref().or(config.config_path.as_deref());
    if config_path.is_some() {
        options.config = load_format_config(config_path)?;
    }
    if let Some(currency) = &args.currency {
        options.currency = currency.to_uppercase();
    }
    for (code, token) in &args.overrides {
        options = options.with_symbol_override(code.clone(), token.clone());
    }
    Ok(options)
}

fn run_mask(config: &Config, args: MaskArgs) -> anyhow::Result<Vec<String>> {
    let options = CurrencyInputOptions::default().with_currency(config.currency.clone());
    let options = apply_format_args(config, &args.format, options)?;
    let input = CurrencyInput::without_callbacks(TextField::new(), options)?;

    args.inputs
        .iter()
        .map(|raw| {
            let raw_input = if args.numeric {
                parse_numeric(raw)?
            } else {
                RawInput::from(raw.as_str())
            };
            let masked = input.calculate(&raw_input)?;
            Ok(format!("{}\t{}", masked.value, masked.masked))
        })
        .collect()
}

fn parse_numeric(raw: &str) -> anyhow::Result<RawInput> {
    let raw = raw.trim();
    if let Ok(minor) = raw.parse::<i64>() {
        return Ok(RawInput::from(minor));
    }
    let value = Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .with_context(|| format!("'{raw}' is not a number"))?;
    Ok(RawInput::from(value))
}

fn run_replay(config: &Config, args: ReplayArgs) -> anyhow::Result<Vec<String>> {
    let json = std::fs::read_to_string(&args.session)
        .with_context(|| format!("Failed to read session {}", args.session.display()))?;
    let mut session: session::Session = serde_json::from_str(&json)
        .with_context(|| format!("Invalid session {}", args.session.display()))?;
    session.options = apply_format_args(config, &args.format, session.options)?;
    tracing::info!(
        "Replaying {} events for {}",
        session.events.len(),
        session.options.currency
    );
    Ok(session::replay(session)?)
}
