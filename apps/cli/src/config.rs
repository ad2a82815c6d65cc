use std::path::PathBuf;

use currency_input_core::constants::DEFAULT_CURRENCY;

/// Process settings read from the environment.
pub struct Config {
    pub config_path: Option<PathBuf>,
    pub currency: String,
    pub log_format: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let config_path = std::env::var("CURRENCY_INPUT_CONFIG")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);
        let currency = std::env::var("CURRENCY_INPUT_CURRENCY")
            .ok()
            .map(|s| s.trim().to_uppercase())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());
        let log_format =
            std::env::var("CURRENCY_INPUT_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
        Self {
            config_path,
            currency,
            log_format,
        }
    }
}
