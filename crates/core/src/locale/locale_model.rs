use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Number formatting conventions of a locale.
///
/// Callers that need a locale the built-in set does not cover supply these
/// through `FormatConfig::conventions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleConventions {
    pub decimal_separator: String,
    pub group_separator: String,
    /// Digits in the group closest to the decimal separator.
    #[serde(default = "default_group_size")]
    pub primary_group_size: usize,
    /// Size of every further group (2 for Indian numbering).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_group_size: Option<usize>,
    #[serde(default)]
    pub currency_position: CurrencyPosition,
    /// Currency symbols that take precedence over the built-in table.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub symbols: BTreeMap<String, String>,
}

fn default_group_size() -> usize {
    3
}

impl Default for LocaleConventions {
    fn default() -> Self {
        Self {
            decimal_separator: ".".to_string(),
            group_separator: ",".to_string(),
            primary_group_size: default_group_size(),
            secondary_group_size: None,
            currency_position: CurrencyPosition::Before,
            symbols: BTreeMap::new(),
        }
    }
}

impl LocaleConventions {
    pub fn new(decimal_separator: &str, group_separator: &str, position: CurrencyPosition) -> Self {
        Self {
            decimal_separator: decimal_separator.to_string(),
            group_separator: group_separator.to_string(),
            currency_position: position,
            ..Self::default()
        }
    }

    pub fn with_secondary_group_size(mut self, size: usize) -> Self {
        self.secondary_group_size = Some(size);
        self
    }

    pub fn with_symbol(mut self, currency: impl Into<String>, symbol: impl Into<String>) -> Self {
        self.symbols.insert(currency.into(), symbol.into());
        self
    }
}

/// Where the currency symbol sits relative to the number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurrencyPosition {
    #[default]
    Before,
    After,
}
