use std::path::Path;

use anyhow::Context;
use currency_input_core::FormatConfig;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global subscriber. Output goes to stderr so stdout only
/// carries results.
pub fn init_tracing(log_format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

/// Reads a format configuration document, or the empty configuration when
/// no path is given.
pub fn load_format_config(path: Option<&Path>) -> anyhow::Result<FormatConfig> {
    let Some(path) = path else {
        return Ok(FormatConfig::default());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config = FormatConfig::from_json(&json)
        .with_context(|| format!("Invalid config {}", path.display()))?;
    tracing::info!("Loaded format config from {}", path.display());
    Ok(config)
}
