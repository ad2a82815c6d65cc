//! Format configuration - caller models, defaults, and rule resolution.

mod config_model;
mod config_resolver;
mod currency_digits;

pub use config_model::{
    CurrencyDisplay, CurrencyRule, FormatConfig, NumberFormats, NumberStyle, ResolvedRule,
};
pub use config_resolver::{merge_with_defaults, resolve_rule, DEFAULT_CONFIG};
pub use currency_digits::minor_units;
