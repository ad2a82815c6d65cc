//! Locale-aware rendering of canonical values.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::{CurrencyDisplay, NumberStyle, ResolvedRule};
use crate::constants::NO_BREAK_SPACE;
use crate::locale::{currency_symbol, CurrencyPosition, LocaleConventions};

/// Renders the magnitude of `value` with exactly `digits` fraction digits.
///
/// The sign is not rendered; callers place it relative to the symbol.
pub fn format_number(
    value: Decimal,
    digits: u32,
    conventions: &LocaleConventions,
    use_grouping: bool,
) -> String {
    let mut magnitude = value
        .abs()
        .round_dp_with_strategy(digits, RoundingStrategy::MidpointAwayFromZero);
    magnitude.rescale(digits);

    let text = magnitude.to_string();
    let (integer, fraction) = match text.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (text.as_str(), None),
    };

    let mut out = if use_grouping {
        group_digits(integer, conventions)
    } else {
        integer.to_string()
    };
    if let Some(fraction) = fraction {
        out.push_str(&conventions.decimal_separator);
        out.push_str(fraction);
    }
    out
}

fn group_digits(integer: &str, conventions: &LocaleConventions) -> String {
    let primary = conventions.primary_group_size.max(1);
    let secondary = conventions.secondary_group_size.unwrap_or(primary).max(1);

    if integer.len() <= primary {
        return integer.to_string();
    }

    let (mut rest, last) = integer.split_at(integer.len() - primary);
    let mut groups = vec![last];
    while rest.len() > secondary {
        let (head, group) = rest.split_at(rest.len() - secondary);
        groups.push(group);
        rest = head;
    }
    groups.push(rest);
    groups.reverse();

    groups.join(&conventions.group_separator)
}

/// Formats `value` the way the resolved rule describes.
pub fn format_amount(value: Decimal, rule: &ResolvedRule) -> String {
    let number = format_number(
        value,
        rule.fraction_digits(),
        &rule.conventions,
        rule.use_grouping,
    );
    let sign = if value.is_sign_negative() && !value.is_zero() {
        "-"
    } else {
        ""
    };

    if rule.style != NumberStyle::Currency {
        return format!("{sign}{number}");
    }

    let symbol = currency_symbol(
        &rule.currency,
        rule.currency_display,
        &rule.locale,
        &rule.conventions,
    );

    if rule.currency_display == CurrencyDisplay::Name {
        return format!("{sign}{number} {symbol}");
    }

    match rule.conventions.currency_position {
        CurrencyPosition::After => format!("{sign}{number}{NO_BREAK_SPACE}{symbol}"),
        CurrencyPosition::Before => {
            // Alphabetic codes and symbols ("CHF", "R") are set apart from the digits.
            if symbol.chars().last().is_some_and(char::is_alphabetic) {
                format!("{sign}{symbol}{NO_BREAK_SPACE}{number}")
            } else {
                format!("{sign}{symbol}{number}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CurrencyRule, FormatConfig};
    use rust_decimal_macros::dec;

    fn rule(locale: &str, code: &str, display: CurrencyDisplay) -> ResolvedRule {
        FormatConfig::default()
            .with_locale(locale)
            .with_rule(code, CurrencyRule::currency(code, 2).with_display(display))
            .resolve(code)
            .unwrap()
    }

    #[test]
    fn test_format_number_grouping() {
        let en = LocaleConventions::default();
        assert_eq!(format_number(dec!(1234567.891), 2, &en, true), "1,234,567.89");
        assert_eq!(format_number(dec!(1234567.891), 2, &en, false), "1234567.89");
        assert_eq!(format_number(dec!(999), 2, &en, true), "999.00");
        assert_eq!(format_number(dec!(-1000), 0, &en, true), "1,000");
        assert_eq!(format_number(Decimal::ZERO, 2, &en, true), "0.00");
    }

    #[test]
    fn test_format_number_indian_grouping() {
        let conventions = LocaleConventions::default().with_secondary_group_size(2);
        assert_eq!(
            format_number(dec!(12345678.9), 2, &conventions, true),
            "1,23,45,678.90"
        );
    }

    #[test]
    fn test_format_amount_en_us() {
        let usd = rule("en-US", "USD", CurrencyDisplay::Symbol);
        assert_eq!(format_amount(dec!(2.05), &usd), "$2.05");
        assert_eq!(format_amount(dec!(-2.05), &usd), "-$2.05");
        assert_eq!(format_amount(dec!(1234.5), &usd), "$1,234.50");
        assert_eq!(format_amount(Decimal::ZERO, &usd), "$0.00");
    }

    #[test]
    fn test_format_amount_code_and_name() {
        let code = rule("en-US", "USD", CurrencyDisplay::Code);
        assert_eq!(format_amount(dec!(12.34), &code), "USD\u{a0}12.34");

        let name = rule("en-US", "USD", CurrencyDisplay::Name);
        assert_eq!(format_amount(dec!(12.34), &name), "12.34 US dollars");

        let zar = rule("en-US", "ZAR", CurrencyDisplay::Symbol);
        assert_eq!(format_amount(dec!(12.34), &zar), "ZAR\u{a0}12.34");
    }

    #[test]
    fn test_format_amount_symbol_after() {
        let eur = rule("de-DE", "EUR", CurrencyDisplay::Symbol);
        assert_eq!(format_amount(dec!(1234.56), &eur), "1.234,56\u{a0}\u{20ac}");
        assert_eq!(format_amount(dec!(-2.05), &eur), "-2,05\u{a0}\u{20ac}");
    }

    #[test]
    fn test_format_amount_decimal_style() {
        let mut plain = rule("en-US", "USD", CurrencyDisplay::Symbol);
        plain.style = NumberStyle::Decimal;
        assert_eq!(format_amount(dec!(-1234.5), &plain), "-1,234.50");
    }
}
