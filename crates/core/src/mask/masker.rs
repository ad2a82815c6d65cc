use rust_decimal::Decimal;
use std::collections::BTreeMap;

use super::formatter::format_amount;
use crate::config::ResolvedRule;

/// Display-only replacement tokens keyed by currency code,
/// e.g. `{"ZAR": "R"}`.
pub type SymbolOverride = BTreeMap<String, String>;

/// A canonical value together with the mask that displays it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskedValue {
    pub value: Decimal,
    pub masked: String,
}

impl MaskedValue {
    pub fn new(value: Decimal, masked: impl Into<String>) -> Self {
        Self {
            value,
            masked: masked.into(),
        }
    }
}

/// Formats `value` for display and applies the symbol override of
/// `currency`, if any.
pub fn mask(
    value: Decimal,
    rule: &ResolvedRule,
    currency: &str,
    symbol_override: Option<&SymbolOverride>,
) -> MaskedValue {
    let formatted = format_amount(value, rule);
    MaskedValue::new(
        value,
        apply_symbol_override(formatted, currency, symbol_override),
    )
}

/// Replaces the first literal occurrence of `currency` in `formatted`.
///
/// Formats that show a symbol instead of the code are left alone, as is
/// any currency without an override entry.
pub fn apply_symbol_override(
    formatted: String,
    currency: &str,
    symbol_override: Option<&SymbolOverride>,
) -> String {
    match symbol_override.and_then(|overrides| overrides.get(currency)) {
        Some(token) if !currency.is_empty() => formatted.replacen(currency, token, 1),
        _ => formatted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CurrencyDisplay, CurrencyRule, FormatConfig};
    use rust_decimal_macros::dec;

    fn overrides(pairs: &[(&str, &str)]) -> SymbolOverride {
        pairs
            .iter()
            .map(|(code, token)| (code.to_string(), token.to_string()))
            .collect()
    }

    #[test]
    fn test_mask_keeps_value() {
        let rule = FormatConfig::default().resolve("USD").unwrap();
        let masked = mask(dec!(2.05), &rule, "USD", None);
        assert_eq!(masked, MaskedValue::new(dec!(2.05), "$2.05"));
    }

    #[test]
    fn test_override_replaces_code_token() {
        let rule = FormatConfig::default()
            .with_rule("ZAR", CurrencyRule::currency("ZAR", 2))
            .resolve("ZAR")
            .unwrap();
        let table = overrides(&[("ZAR", "R")]);

        let masked = mask(dec!(12.34), &rule, "ZAR", Some(&table));
        assert_eq!(masked.masked, "R\u{a0}12.34");
    }

    #[test]
    fn test_override_ignores_symbol_formats() {
        let rule = FormatConfig::default().resolve("USD").unwrap();
        let table = overrides(&[("USD", "MLSD")]);

        let masked = mask(dec!(12.34), &rule, "USD", Some(&table));
        assert_eq!(masked.masked, "$12.34");
    }

    #[test]
    fn test_override_applies_to_code_display() {
        let rule = FormatConfig::default()
            .with_rule(
                "USD",
                CurrencyRule::currency("USD", 2).with_display(CurrencyDisplay::Code),
            )
            .resolve("USD")
            .unwrap();
        let table = overrides(&[("USD", "MLSD")]);

        let masked = mask(dec!(12.34), &rule, "USD", Some(&table));
        assert_eq!(masked.masked, "MLSD\u{a0}12.34");
    }

    #[test]
    fn test_missing_override_entry_is_skipped() {
        let table = overrides(&[("EUR", "E")]);
        assert_eq!(
            apply_symbol_override("USD\u{a0}1.00".to_string(), "USD", Some(&table)),
            "USD\u{a0}1.00"
        );
    }

    #[test]
    fn test_override_replaces_first_occurrence_only() {
        let table = overrides(&[("USD", "X")]);
        assert_eq!(
            apply_symbol_override("USD USD".to_string(), "USD", Some(&table)),
            "X USD"
        );
    }
}
