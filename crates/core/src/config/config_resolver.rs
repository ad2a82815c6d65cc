//! Configuration resolution.
//!
//! Merges a caller configuration over the built-in defaults and produces an
//! immutable [`ResolvedRule`] for one currency. Resolution is pure: the
//! caller's configuration and the defaults are never modified, so several
//! inputs with different currencies can resolve from the same config.

use lazy_static::lazy_static;
use log::{debug, warn};

use super::config_model::{CurrencyRule, FormatConfig, NumberStyle, ResolvedRule};
use super::currency_digits::minor_units;
use crate::constants::{DEFAULT_CURRENCY, DEFAULT_LOCALE, MAX_FRACTION_DIGITS};
use crate::errors::ConfigError;
use crate::locale::conventions_for_locale;

lazy_static! {
    /// Built-in configuration: `en-US` with a two-digit USD rule.
    pub static ref DEFAULT_CONFIG: FormatConfig = FormatConfig::default()
        .with_locale(DEFAULT_LOCALE)
        .with_rule(DEFAULT_CURRENCY, CurrencyRule::currency(DEFAULT_CURRENCY, 2));
}

/// Merges `config` over [`DEFAULT_CONFIG`].
///
/// The caller wins on every key it sets. Currency rules merge key by key,
/// so a caller that only configures EUR still gets the default USD rule.
pub fn merge_with_defaults(config: &FormatConfig) -> FormatConfig {
    let mut merged = DEFAULT_CONFIG.clone();

    if let Some(locale) = &config.locale {
        merged.locale = Some(locale.clone());
    }
    for (code, rule) in &config.formats.number {
        merged.formats.number.insert(code.clone(), rule.clone());
    }
    if let Some(conventions) = &config.conventions {
        merged.conventions = Some(conventions.clone());
    }

    merged
}

/// Resolves the rule for `currency`.
///
/// The returned rule always has `minimum_fraction_digits` equal to
/// `maximum_fraction_digits`; without this a digit string such as `205`
/// would render as `2.5` instead of `2.05`.
pub fn resolve_rule(config: &FormatConfig, currency: &str) -> Result<ResolvedRule, ConfigError> {
    let merged = merge_with_defaults(config);

    let Some(rule) = merged.rule(currency) else {
        warn!("No number format configured for currency {}", currency);
        return Err(ConfigError::MissingCurrencyRule {
            currency: currency.to_string(),
        });
    };

    if !matches!(rule.style, NumberStyle::Currency | NumberStyle::Decimal) {
        warn!(
            "Unsupported style {} configured for currency {}",
            rule.style.as_str(),
            currency
        );
        return Err(ConfigError::UnsupportedStyle {
            currency: currency.to_string(),
            style: rule.style.as_str().to_string(),
        });
    }

    let code = rule
        .currency
        .clone()
        .unwrap_or_else(|| currency.to_string());

    let digits = match (rule.maximum_fraction_digits, rule.minimum_fraction_digits) {
        (Some(maximum), _) => maximum,
        (None, Some(minimum)) => minimum.max(minor_units(&code)),
        (None, None) => minor_units(&code),
    };
    if digits > MAX_FRACTION_DIGITS {
        warn!(
            "Fraction digits {} for currency {} are out of range",
            digits, currency
        );
        return Err(ConfigError::InvalidFractionDigits {
            currency: currency.to_string(),
            digits,
        });
    }

    let locale = merged
        .locale
        .clone()
        .unwrap_or_else(|| DEFAULT_LOCALE.to_string());
    let conventions = merged
        .conventions
        .clone()
        .unwrap_or_else(|| conventions_for_locale(&locale));

    debug!(
        "Resolved {} rule for locale {} with {} fraction digits",
        code, locale, digits
    );

    Ok(ResolvedRule {
        locale,
        style: rule.style,
        currency: code,
        currency_display: rule.currency_display,
        minimum_fraction_digits: digits,
        maximum_fraction_digits: digits,
        use_grouping: rule.use_grouping.unwrap_or(true),
        conventions,
    })
}

impl FormatConfig {
    /// Shorthand for [`resolve_rule`].
    pub fn resolve(&self, currency: &str) -> Result<ResolvedRule, ConfigError> {
        resolve_rule(self, currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CurrencyDisplay;

    #[test]
    fn test_default_config_resolves_usd() {
        let rule = resolve_rule(&FormatConfig::default(), "USD").unwrap();
        assert_eq!(rule.locale, "en-US");
        assert_eq!(rule.currency, "USD");
        assert_eq!(rule.minimum_fraction_digits, 2);
        assert_eq!(rule.maximum_fraction_digits, 2);
        assert!(rule.use_grouping);
    }

    #[test]
    fn test_missing_rule_is_an_error() {
        let err = resolve_rule(&FormatConfig::default(), "EUR").unwrap_err();
        assert_eq!(
            err,
            ConfigError::MissingCurrencyRule {
                currency: "EUR".to_string()
            }
        );
    }

    #[test]
    fn test_caller_rules_keep_default_usd() {
        let config = FormatConfig::default()
            .with_locale("de-DE")
            .with_rule("EUR", CurrencyRule::currency("EUR", 2));

        let merged = merge_with_defaults(&config);
        assert!(merged.rule("USD").is_some());
        assert!(merged.rule("EUR").is_some());
        assert_eq!(merged.locale.as_deref(), Some("de-DE"));
    }

    #[test]
    fn test_caller_rule_replaces_default() {
        let config = FormatConfig::default().with_rule(
            "USD",
            CurrencyRule::currency("USD", 3).with_display(CurrencyDisplay::Code),
        );

        let rule = resolve_rule(&config, "USD").unwrap();
        assert_eq!(rule.maximum_fraction_digits, 3);
        assert_eq!(rule.currency_display, CurrencyDisplay::Code);
    }

    #[test]
    fn test_mismatched_bounds_are_repaired() {
        let config = FormatConfig::default().with_rule(
            "USD",
            CurrencyRule::currency("USD", 2).with_fraction_digits(Some(0), Some(4)),
        );

        let rule = resolve_rule(&config, "USD").unwrap();
        assert_eq!(rule.minimum_fraction_digits, 4);
        assert_eq!(rule.maximum_fraction_digits, 4);
    }

    #[test]
    fn test_resolution_does_not_touch_caller_config() {
        let config = FormatConfig::default().with_rule(
            "USD",
            CurrencyRule::currency("USD", 2).with_fraction_digits(Some(0), Some(2)),
        );
        let before = config.clone();

        resolve_rule(&config, "USD").unwrap();

        assert_eq!(config, before);
        assert_eq!(
            DEFAULT_CONFIG.rule("USD").unwrap().minimum_fraction_digits,
            Some(2)
        );
    }

    #[test]
    fn test_iso_digits_when_bounds_absent() {
        let config = FormatConfig::default()
            .with_rule("JPY", CurrencyRule::currency("JPY", 0).with_fraction_digits(None, None))
            .with_rule("KWD", CurrencyRule::currency("KWD", 0).with_fraction_digits(None, None))
            .with_rule("EUR", CurrencyRule::currency("EUR", 0).with_fraction_digits(Some(1), None));

        assert_eq!(resolve_rule(&config, "JPY").unwrap().fraction_digits(), 0);
        assert_eq!(resolve_rule(&config, "KWD").unwrap().fraction_digits(), 3);
        assert_eq!(resolve_rule(&config, "EUR").unwrap().fraction_digits(), 2);
    }

    #[test]
    fn test_rule_currency_defaults_to_key() {
        let rule = CurrencyRule {
            currency: None,
            ..CurrencyRule::currency("ignored", 2)
        };
        let config = FormatConfig::default().with_rule("GBP", rule);

        assert_eq!(resolve_rule(&config, "GBP").unwrap().currency, "GBP");
    }

    #[test]
    fn test_out_of_range_digits() {
        let config = FormatConfig::default().with_rule("USD", CurrencyRule::currency("USD", 21));
        let err = resolve_rule(&config, "USD").unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidFractionDigits {
                currency: "USD".to_string(),
                digits: 21
            }
        );
    }

    #[test]
    fn test_unsupported_style() {
        let rule = CurrencyRule {
            style: NumberStyle::Percent,
            ..CurrencyRule::currency("USD", 2)
        };
        let config = FormatConfig::default().with_rule("USD", rule);

        assert!(matches!(
            resolve_rule(&config, "USD"),
            Err(ConfigError::UnsupportedStyle { .. })
        ));
    }

    #[test]
    fn test_locale_conventions_follow_locale() {
        let config = FormatConfig::default()
            .with_locale("de-DE")
            .with_rule("EUR", CurrencyRule::currency("EUR", 2));

        let rule = resolve_rule(&config, "EUR").unwrap();
        assert_eq!(rule.conventions.decimal_separator, ",");
        assert_eq!(rule.conventions.group_separator, ".");
    }
}
