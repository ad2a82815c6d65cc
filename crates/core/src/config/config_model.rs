//! Format configuration domain models.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::errors::ConfigError;
use crate::locale::LocaleConventions;

/// Caller-supplied formatting configuration.
///
/// Mirrors the JSON shape callers already use:
///
/// ```json
/// {
///   "locale": "en-US",
///   "formats": {
///     "number": {
///       "USD": { "style": "currency", "currency": "USD", "maximumFractionDigits": 2 }
///     }
///   }
/// }
/// ```
///
/// Every field is optional so a partial configuration can be merged over
/// the built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(default)]
    pub formats: NumberFormats,
    /// Locale conventions supplied by the caller. When absent, the built-in
    /// conventions for `locale` are used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conventions: Option<LocaleConventions>,
}

impl FormatConfig {
    /// Parses a configuration document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    pub fn with_rule(mut self, currency: impl Into<String>, rule: CurrencyRule) -> Self {
        self.formats.number.insert(currency.into(), rule);
        self
    }

    pub fn with_conventions(mut self, conventions: LocaleConventions) -> Self {
        self.conventions = Some(conventions);
        self
    }

    /// Looks up the rule registered for a currency code.
    pub fn rule(&self, currency: &str) -> Option<&CurrencyRule> {
        self.formats.number.get(currency)
    }
}

/// The `formats` section: per-currency number rules keyed by ISO code.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NumberFormats {
    #[serde(default)]
    pub number: BTreeMap<String, CurrencyRule>,
}

/// Formatting parameters for one currency, as supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyRule {
    #[serde(default)]
    pub style: NumberStyle,
    /// ISO 4217 code rendered by this rule. Defaults to the key the rule is
    /// registered under.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default)]
    pub currency_display: CurrencyDisplay,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_fraction_digits: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum_fraction_digits: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_grouping: Option<bool>,
}

impl CurrencyRule {
    /// A currency-style rule with a fixed number of fraction digits.
    pub fn currency(code: impl Into<String>, fraction_digits: u32) -> Self {
        Self {
            style: NumberStyle::Currency,
            currency: Some(code.into()),
            currency_display: CurrencyDisplay::Symbol,
            minimum_fraction_digits: Some(fraction_digits),
            maximum_fraction_digits: Some(fraction_digits),
            use_grouping: None,
        }
    }

    pub fn with_display(mut self, display: CurrencyDisplay) -> Self {
        self.currency_display = display;
        self
    }

    pub fn with_fraction_digits(mut self, minimum: Option<u32>, maximum: Option<u32>) -> Self {
        self.minimum_fraction_digits = minimum;
        self.maximum_fraction_digits = maximum;
        self
    }

    pub fn with_grouping(mut self, use_grouping: bool) -> Self {
        self.use_grouping = Some(use_grouping);
        self
    }
}

/// Number formatting style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberStyle {
    #[default]
    Currency,
    Decimal,
    Percent,
    Unit,
}

impl NumberStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            NumberStyle::Currency => "currency",
            NumberStyle::Decimal => "decimal",
            NumberStyle::Percent => "percent",
            NumberStyle::Unit => "unit",
        }
    }
}

/// How the currency is shown next to the amount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CurrencyDisplay {
    #[default]
    Symbol,
    NarrowSymbol,
    Code,
    Name,
}

/// A currency rule after merging and repair.
///
/// `minimum_fraction_digits == maximum_fraction_digits` always holds; the
/// resolver is the only constructor.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRule {
    pub locale: String,
    pub style: NumberStyle,
    pub currency: String,
    pub currency_display: CurrencyDisplay,
    pub minimum_fraction_digits: u32,
    pub maximum_fraction_digits: u32,
    pub use_grouping: bool,
    pub conventions: LocaleConventions,
}

impl ResolvedRule {
    /// Fixed count of fraction digits every canonical value carries.
    pub fn fraction_digits(&self) -> u32 {
        self.maximum_fraction_digits
    }
}
