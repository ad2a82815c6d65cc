use rust_decimal::prelude::*;

use crate::errors::Error;

/// A raw amount as it reaches the normalizer.
///
/// The three shapes follow different conversion rules, see
/// [`normalize`](super::normalize).
#[derive(Debug, Clone, PartialEq)]
pub enum RawInput {
    /// Text from the field. Digits are minor units; everything except ASCII
    /// digits and `-` is noise.
    Text(String),
    /// A whole number, taken as minor units (`5` is five cents in USD).
    Integer(i128),
    /// A number with a fractional part, taken as the amount itself and
    /// rounded to the currency's fraction digits.
    Fractional(Decimal),
}

impl RawInput {
    /// Classifies a numeric value as whole or fractional.
    ///
    /// `5.00` is whole and therefore behaves like `5`.
    pub fn from_decimal(value: Decimal) -> Self {
        if value.fract().is_zero() {
            match value.trunc().to_i128() {
                Some(whole) => RawInput::Integer(whole),
                None => RawInput::Fractional(value),
            }
        } else {
            RawInput::Fractional(value)
        }
    }
}

impl Default for RawInput {
    fn default() -> Self {
        RawInput::Integer(0)
    }
}

impl From<&str> for RawInput {
    fn from(text: &str) -> Self {
        RawInput::Text(text.to_string())
    }
}

impl From<String> for RawInput {
    fn from(text: String) -> Self {
        RawInput::Text(text)
    }
}

impl From<i64> for RawInput {
    fn from(value: i64) -> Self {
        RawInput::Integer(i128::from(value))
    }
}

impl From<i32> for RawInput {
    fn from(value: i32) -> Self {
        RawInput::Integer(i128::from(value))
    }
}

impl From<Decimal> for RawInput {
    fn from(value: Decimal) -> Self {
        RawInput::from_decimal(value)
    }
}

impl TryFrom<f64> for RawInput {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Decimal::from_f64(value)
            .map(RawInput::from_decimal)
            .ok_or_else(|| Error::UnrepresentableNumber(value.to_string()))
    }
}
