//! Locale conventions used by the display masker.

mod locale_data;
mod locale_model;

pub use locale_data::{
    conventions_for_locale, currency_name, currency_symbol, language_subtag, region_subtag,
};
pub use locale_model::{CurrencyPosition, LocaleConventions};
