//! Built-in locale conventions and currency symbol lookups.
//!
//! This is a small fallback set keyed on language and region subtags, not a
//! CLDR replacement. Locales outside it format with English conventions
//! unless the caller supplies their own.

use crate::config::CurrencyDisplay;

use super::locale_model::{CurrencyPosition, LocaleConventions};

/// Lowercase language subtag of a BCP 47 tag (`"pt-BR"` -> `"pt"`).
pub fn language_subtag(locale: &str) -> String {
    locale
        .split(['-', '_'])
        .next()
        .unwrap_or(locale)
        .to_ascii_lowercase()
}

/// Uppercase region subtag, skipping an optional script subtag.
pub fn region_subtag(locale: &str) -> Option<String> {
    locale
        .split(['-', '_'])
        .skip(1)
        .find(|part| {
            (part.len() == 2 && part.chars().all(|c| c.is_ascii_alphabetic()))
                || (part.len() == 3 && part.chars().all(|c| c.is_ascii_digit()))
        })
        .map(|part| part.to_ascii_uppercase())
}

/// Conventions for a locale tag.
pub fn conventions_for_locale(locale: &str) -> LocaleConventions {
    let lang = language_subtag(locale);
    let region = region_subtag(locale);

    match (lang.as_str(), region.as_deref()) {
        ("de", Some("CH" | "LI")) => {
            LocaleConventions::new(".", "\u{2019}", CurrencyPosition::Before)
        }
        ("en", Some("IN")) | ("hi", _) => {
            LocaleConventions::new(".", ",", CurrencyPosition::Before).with_secondary_group_size(2)
        }
        ("fr", _) => LocaleConventions::new(",", "\u{202F}", CurrencyPosition::After),
        (
            "de" | "es" | "it" | "nl" | "pt" | "da" | "id" | "tr" | "el" | "ro" | "hr" | "sl"
            | "sr" | "ca" | "gl" | "eu" | "vi",
            _,
        ) => LocaleConventions::new(",", ".", CurrencyPosition::After),
        (
            "sv" | "nb" | "nn" | "no" | "fi" | "cs" | "sk" | "pl" | "ru" | "uk" | "bg" | "hu"
            | "lt" | "lv" | "et" | "be",
            _,
        ) => LocaleConventions::new(",", "\u{00A0}", CurrencyPosition::After),
        _ => LocaleConventions::default(),
    }
}

/// Text shown for `currency` in `locale`.
///
/// Returns the ISO code when the locale has no symbol for the currency;
/// that is the token a symbol override replaces.
pub fn currency_symbol(
    currency: &str,
    display: CurrencyDisplay,
    locale: &str,
    conventions: &LocaleConventions,
) -> String {
    let code = currency.to_ascii_uppercase();

    match display {
        CurrencyDisplay::Code => code,
        CurrencyDisplay::Name => currency_name(&code).map(str::to_string).unwrap_or(code),
        CurrencyDisplay::Symbol | CurrencyDisplay::NarrowSymbol => {
            if let Some(symbol) = conventions.symbols.get(&code) {
                return symbol.clone();
            }

            let lang = language_subtag(locale);
            let region = region_subtag(locale);

            let narrow = match display {
                CurrencyDisplay::NarrowSymbol => narrow_symbol(&code),
                _ => None,
            };

            narrow
                .or_else(|| native_symbol(&code, &lang, region.as_deref()))
                .or_else(|| shared_symbol(&code, &lang))
                .map(str::to_string)
                .unwrap_or(code)
        }
    }
}

/// Symbols a locale uses for its own currency.
fn native_symbol(code: &str, lang: &str, region: Option<&str>) -> Option<&'static str> {
    match (code, lang, region) {
        ("CAD", _, Some("CA"))
        | ("AUD", _, Some("AU"))
        | ("NZD", _, Some("NZ"))
        | ("HKD", _, Some("HK"))
        | ("SGD", _, Some("SG"))
        | ("MXN", _, Some("MX")) => Some("$"),
        ("ZAR", "af" | "zu" | "xh", _) | ("ZAR", _, Some("ZA")) => Some("R"),
        ("SEK", "sv", _) | ("NOK", "nb" | "nn" | "no", _) | ("DKK", "da", _) | ("ISK", "is", _) => {
            Some("kr")
        }
        ("PLN", "pl", _) => Some("z\u{0142}"),
        ("CZK", "cs", _) => Some("K\u{010D}"),
        ("RUB", "ru", _) => Some("\u{20BD}"),
        ("TRY", "tr", _) => Some("\u{20BA}"),
        ("THB", "th", _) => Some("\u{0E3F}"),
        ("CNY", "zh", _) => Some("\u{00A5}"),
        ("JPY", "ja", _) => Some("\u{FFE5}"),
        _ => None,
    }
}

/// Symbols understood across locales.
fn shared_symbol(code: &str, lang: &str) -> Option<&'static str> {
    match code {
        "USD" => {
            if matches!(lang, "en" | "ja" | "de" | "fr") {
                Some("$")
            } else {
                Some("US$")
            }
        }
        "EUR" => Some("\u{20AC}"),
        "GBP" => Some("\u{00A3}"),
        "JPY" => Some("\u{00A5}"),
        "CNY" => Some("CN\u{00A5}"),
        "INR" => Some("\u{20B9}"),
        "KRW" => Some("\u{20A9}"),
        "ILS" => Some("\u{20AA}"),
        "VND" => Some("\u{20AB}"),
        "BRL" => Some("R$"),
        "CAD" => Some("CA$"),
        "AUD" => Some("A$"),
        "NZD" => Some("NZ$"),
        "HKD" => Some("HK$"),
        "MXN" => Some("MX$"),
        "TWD" => Some("NT$"),
        "XAF" => Some("FCFA"),
        _ => None,
    }
}

fn narrow_symbol(code: &str) -> Option<&'static str> {
    match code {
        "USD" | "CAD" | "AUD" | "NZD" | "HKD" | "SGD" | "MXN" | "ARS" | "CLP" | "COP" | "TWD" => {
            Some("$")
        }
        "ZAR" => Some("R"),
        "SEK" | "NOK" | "DKK" | "ISK" => Some("kr"),
        "PLN" => Some("z\u{0142}"),
        "RUB" => Some("\u{20BD}"),
        "TRY" => Some("\u{20BA}"),
        "BRL" => Some("R$"),
        _ => None,
    }
}

/// English plural display name.
pub fn currency_name(code: &str) -> Option<&'static str> {
    match code {
        "USD" => Some("US dollars"),
        "EUR" => Some("euros"),
        "GBP" => Some("British pounds"),
        "JPY" => Some("Japanese yen"),
        "CAD" => Some("Canadian dollars"),
        "AUD" => Some("Australian dollars"),
        "CHF" => Some("Swiss francs"),
        "CNY" => Some("Chinese yuan"),
        "INR" => Some("Indian rupees"),
        "BRL" => Some("Brazilian reals"),
        "MXN" => Some("Mexican pesos"),
        "ZAR" => Some("South African rand"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbol(code: &str, locale: &str) -> String {
        currency_symbol(
            code,
            CurrencyDisplay::Symbol,
            locale,
            &conventions_for_locale(locale),
        )
    }

    #[test]
    fn test_subtags() {
        assert_eq!(language_subtag("pt-BR"), "pt");
        assert_eq!(language_subtag("EN_us"), "en");
        assert_eq!(region_subtag("pt-BR").as_deref(), Some("BR"));
        assert_eq!(region_subtag("zh-Hant-TW").as_deref(), Some("TW"));
        assert_eq!(region_subtag("es-419").as_deref(), Some("419"));
        assert_eq!(region_subtag("en"), None);
    }

    #[test]
    fn test_conventions() {
        let us = conventions_for_locale("en-US");
        assert_eq!(us.decimal_separator, ".");
        assert_eq!(us.currency_position, CurrencyPosition::Before);

        let de = conventions_for_locale("de-DE");
        assert_eq!(de.decimal_separator, ",");
        assert_eq!(de.group_separator, ".");
        assert_eq!(de.currency_position, CurrencyPosition::After);

        let ch = conventions_for_locale("de-CH");
        assert_eq!(ch.group_separator, "\u{2019}");
        assert_eq!(ch.currency_position, CurrencyPosition::Before);

        assert_eq!(conventions_for_locale("en-IN").secondary_group_size, Some(2));
        assert_eq!(conventions_for_locale("xx"), LocaleConventions::default());
    }

    #[test]
    fn test_symbols() {
        assert_eq!(symbol("USD", "en-US"), "$");
        assert_eq!(symbol("USD", "pt-BR"), "US$");
        assert_eq!(symbol("EUR", "de-DE"), "\u{20AC}");
        assert_eq!(symbol("ZAR", "en-US"), "ZAR");
        assert_eq!(symbol("ZAR", "en-ZA"), "R");
        assert_eq!(symbol("CAD", "en-US"), "CA$");
        assert_eq!(symbol("CAD", "en-CA"), "$");
        assert_eq!(symbol("SEK", "sv-SE"), "kr");
        assert_eq!(symbol("CHF", "de-CH"), "CHF");
    }

    #[test]
    fn test_display_variants() {
        let conventions = LocaleConventions::default();
        assert_eq!(
            currency_symbol("usd", CurrencyDisplay::Code, "en-US", &conventions),
            "USD"
        );
        assert_eq!(
            currency_symbol("USD", CurrencyDisplay::Name, "en-US", &conventions),
            "US dollars"
        );
        assert_eq!(
            currency_symbol("ZAR", CurrencyDisplay::NarrowSymbol, "en-US", &conventions),
            "R"
        );
        assert_eq!(
            currency_symbol("XYZ", CurrencyDisplay::Name, "en-US", &conventions),
            "XYZ"
        );
    }

    #[test]
    fn test_supplied_symbols_win() {
        let conventions = LocaleConventions::default().with_symbol("ZAR", "R");
        assert_eq!(
            currency_symbol("ZAR", CurrencyDisplay::Symbol, "en-US", &conventions),
            "R"
        );
    }
}
