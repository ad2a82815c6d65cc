//! Raw input to canonical value conversion.
//!
//! Every input is first reduced to an integer count of minor units and then
//! shifted right by the rule's fraction digits. The conversion is a masking
//! convention, not a general decimal parser: text is assumed to be the
//! field's own mask plus whatever the user just typed.

use rust_decimal::{Decimal, RoundingStrategy};

use super::raw_input::RawInput;
use crate::config::ResolvedRule;
use crate::constants::MAX_INPUT_DIGITS;
use crate::errors::{Error, Result};

/// Reduces field text to a signed count of minor units.
///
/// Only ASCII digits and `-` survive. The result is negative when the
/// surviving text starts with `-`; any other minus sign is dropped. Text
/// without digits cleans to zero. Digits beyond [`MAX_INPUT_DIGITS`]
/// significant ones are ignored.
pub fn clean_text(text: &str) -> i128 {
    let kept = text.chars().filter(|c| c.is_ascii_digit() || *c == '-');
    let negative = kept.clone().next() == Some('-');

    let magnitude = kept
        .filter_map(|c| c.to_digit(10))
        .skip_while(|digit| *digit == 0)
        .take(MAX_INPUT_DIGITS)
        .fold(0i128, |acc, digit| acc * 10 + i128::from(digit));

    if negative {
        -magnitude
    } else {
        magnitude
    }
}

/// Normalizes `input` to a value with exactly the rule's fraction digits.
pub fn normalize(input: &RawInput, rule: &ResolvedRule) -> Result<Decimal> {
    normalize_with_digits(input, rule.fraction_digits())
}

/// Normalizes `input` to a value with exactly `digits` fraction digits.
///
/// - `Text`: the cleaned digits are minor units.
/// - `Integer`: the number is minor units as well, so `5` becomes `0.05`
///   with two digits.
/// - `Fractional`: rounded half away from zero to `digits`, then its
///   digits are the minor units.
///
/// Text never fails. Numeric input fails only when the result does not
/// fit a `Decimal` at `digits` fraction digits.
pub fn normalize_with_digits(input: &RawInput, digits: u32) -> Result<Decimal> {
    let minor_units = match input {
        RawInput::Text(text) => clean_text(text),
        RawInput::Integer(whole) => *whole,
        RawInput::Fractional(value) => {
            let mut rounded =
                value.round_dp_with_strategy(digits, RoundingStrategy::MidpointAwayFromZero);
            rounded.rescale(digits);
            // rescale keeps a smaller scale when the mantissa would overflow
            if rounded.scale() != digits {
                return Err(Error::UnrepresentableNumber(value.to_string()));
            }
            rounded.mantissa()
        }
    };

    Decimal::try_from_i128_with_scale(minor_units, digits)
        .map_err(|_| Error::UnrepresentableNumber(minor_units.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn text(raw: &str) -> Decimal {
        normalize_with_digits(&RawInput::from(raw), 2).unwrap()
    }

    #[test]
    fn test_clean_text() {
        assert_eq!(clean_text("205"), 205);
        assert_eq!(clean_text("$2.05"), 205);
        assert_eq!(clean_text("-$1,234.50"), -123450);
        assert_eq!(clean_text("abc"), 0);
        assert_eq!(clean_text(""), 0);
        assert_eq!(clean_text("-"), 0);
        assert_eq!(clean_text("0007"), 7);
        assert_eq!(clean_text("$2.05-"), 205);
        assert_eq!(clean_text("1-2"), 12);
    }

    #[test]
    fn test_clean_text_caps_digits() {
        let long = "9".repeat(40);
        assert_eq!(clean_text(&long), 10i128.pow(28) - 1);
    }

    #[test]
    fn test_text_is_minor_units() {
        assert_eq!(text("205"), dec!(2.05));
        assert_eq!(text("20050"), dec!(200.50));
        assert_eq!(text("$2.055"), dec!(20.55));
        assert_eq!(text("-$2.05"), dec!(-2.05));
        assert_eq!(text(""), Decimal::ZERO);
        assert_eq!(text("-"), Decimal::ZERO);
    }

    #[test]
    fn test_value_keeps_fraction_digits() {
        assert_eq!(text("20050").scale(), 2);
        assert_eq!(text("").scale(), 2);
        assert_eq!(text("20050").to_string(), "200.50");
    }

    #[test]
    fn test_integer_is_minor_units() {
        let value = normalize_with_digits(&RawInput::Integer(5), 2).unwrap();
        assert_eq!(value, dec!(0.05));

        let value = normalize_with_digits(&RawInput::Integer(1500), 0).unwrap();
        assert_eq!(value, dec!(1500));
    }

    #[test]
    fn test_fractional_rounds_to_digits() {
        let value = normalize_with_digits(&RawInput::Fractional(dec!(2.5)), 2).unwrap();
        assert_eq!(value.to_string(), "2.50");

        let value = normalize_with_digits(&RawInput::Fractional(dec!(2.005)), 2).unwrap();
        assert_eq!(value, dec!(2.01));

        let value = normalize_with_digits(&RawInput::Fractional(dec!(-2.005)), 2).unwrap();
        assert_eq!(value, dec!(-2.01));

        let value = normalize_with_digits(&RawInput::Fractional(dec!(7.6)), 0).unwrap();
        assert_eq!(value, dec!(8));
    }

    #[test]
    fn test_integer_overflow_is_reported() {
        let err = normalize_with_digits(&RawInput::Integer(i128::MAX / 10), 2).unwrap_err();
        assert!(matches!(err, Error::UnrepresentableNumber(_)));
    }

    #[test]
    fn test_integer_keeps_digits_as_minor_units() {
        let value = normalize_with_digits(&RawInput::Integer(-1234), 3).unwrap();
        assert_eq!(value.to_string(), "-1.234");

        let value = normalize_with_digits(&RawInput::Integer(50), 2).unwrap();
        assert_eq!(value.to_string(), "0.50");
    }

    #[test]
    fn test_fractional_overflow_is_reported() {
        let err = normalize_with_digits(
            &RawInput::Fractional(dec!(7000000000000000000000000000.5)),
            2,
        )
        .unwrap_err();
        assert!(matches!(err, Error::UnrepresentableNumber(_)));
    }
}
