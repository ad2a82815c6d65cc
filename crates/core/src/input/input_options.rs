use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::FormatConfig;
use crate::constants::DEFAULT_CURRENCY;
use crate::mask::SymbolOverride;

/// Everything a caller configures on a currency input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyInputOptions {
    #[serde(default)]
    pub config: FormatConfig,
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Controlled value. Whole numbers are minor units.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Decimal>,
    /// Used when `value` is absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Decimal>,
    /// Inclusive upper bound for accepted values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<Decimal>,
    #[serde(default)]
    pub auto_focus: bool,
    #[serde(default)]
    pub auto_select: bool,
    #[serde(default)]
    pub auto_reset: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency_symbol_override: Option<SymbolOverride>,
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

impl Default for CurrencyInputOptions {
    fn default() -> Self {
        Self {
            config: FormatConfig::default(),
            currency: default_currency(),
            value: None,
            default_value: None,
            max: None,
            auto_focus: false,
            auto_select: false,
            auto_reset: false,
            currency_symbol_override: None,
        }
    }
}

impl CurrencyInputOptions {
    pub fn with_config(mut self, config: FormatConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    pub fn with_value(mut self, value: Decimal) -> Self {
        self.value = Some(value);
        self
    }

    pub fn with_default_value(mut self, value: Decimal) -> Self {
        self.default_value = Some(value);
        self
    }

    pub fn with_max(mut self, max: Decimal) -> Self {
        self.max = Some(max);
        self
    }

    pub fn with_auto_focus(mut self, enabled: bool) -> Self {
        self.auto_focus = enabled;
        self
    }

    pub fn with_auto_select(mut self, enabled: bool) -> Self {
        self.auto_select = enabled;
        self
    }

    pub fn with_auto_reset(mut self, enabled: bool) -> Self {
        self.auto_reset = enabled;
        self
    }

    pub fn with_symbol_override(
        mut self,
        currency: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        self.currency_symbol_override
            .get_or_insert_with(SymbolOverride::new)
            .insert(currency.into(), token.into());
        self
    }

    /// True when switching to `other` changes what the field displays
    /// without any user event.
    pub(crate) fn needs_resync(&self, other: &Self) -> bool {
        self.value != other.value
            || self.default_value != other.default_value
            || self.currency != other.currency
            || self.config != other.config
    }
}
