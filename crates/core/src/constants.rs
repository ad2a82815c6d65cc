/// Currency used when the caller does not pick one
pub const DEFAULT_CURRENCY: &str = "USD";

/// Locale used when the caller configuration does not name one
pub const DEFAULT_LOCALE: &str = "en-US";

/// Largest fraction digit count accepted by a currency rule
pub const MAX_FRACTION_DIGITS: u32 = 20;

/// Significant digits kept from a raw text input (precision of `Decimal`)
pub const MAX_INPUT_DIGITS: usize = 28;

/// Separator placed between an alphabetic currency code and the number
pub const NO_BREAK_SPACE: char = '\u{00A0}';
