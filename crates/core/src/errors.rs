//! Core error types for the currency input engine.
//!
//! Only configuration problems are errors. Malformed raw input is recovered
//! by the normalizer and an exceeded bound is a silent rollback, so neither
//! shows up here.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the engine.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid currency format configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Numeric input is not representable: {0}")]
    UnrepresentableNumber(String),
}

/// Errors produced while resolving a currency rule from the merged
/// configuration.
///
/// All of these are fatal for the current call: continuing with a guessed
/// rule would corrupt every value derived from it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The merged configuration has no `formats.number[currency]` entry.
    #[error("No number format configured for currency '{currency}'")]
    MissingCurrencyRule { currency: String },

    /// Fraction digits outside the range number formatting accepts.
    #[error("Fraction digits {digits} for currency '{currency}' are out of range (0..=20)")]
    InvalidFractionDigits { currency: String, digits: u32 },

    /// The rule asks for a style that cannot render an amount.
    #[error("Style '{style}' is not supported for currency '{currency}'")]
    UnsupportedStyle { currency: String, style: String },

    /// The configuration document could not be parsed.
    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Config(ConfigError::from(err))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
