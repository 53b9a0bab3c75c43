//! Display currencies and money formatting.
//!
//! All amounts are stored in RUB; other currencies are display-only
//! conversions through the cached exchange rates.

use serde::{Deserialize, Serialize};

/// Supported display currencies (RUB is the base)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    #[serde(rename = "RUB")]
    Rub,
    #[serde(rename = "USD")]
    Usd,
    #[serde(rename = "EUR")]
    Eur,
    #[serde(rename = "CNY")]
    Cny,
}

/// Where the currency symbol sits relative to the amount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPosition {
    Before,
    After,
}

impl Currency {
    /// ISO code used in the database and API payloads
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Rub => "RUB",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Cny => "CNY",
        }
    }

    /// All supported currencies
    pub fn all() -> Vec<Currency> {
        vec![Currency::Rub, Currency::Usd, Currency::Eur, Currency::Cny]
    }

    /// Parse from the ISO code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "RUB" => Some(Currency::Rub),
            "USD" => Some(Currency::Usd),
            "EUR" => Some(Currency::Eur),
            "CNY" => Some(Currency::Cny),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Rub => "₽",
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Cny => "¥",
        }
    }

    pub fn symbol_position(&self) -> SymbolPosition {
        match self {
            Currency::Usd | Currency::Cny => SymbolPosition::Before,
            Currency::Rub | Currency::Eur => SymbolPosition::After,
        }
    }

    /// Thousands / decimal separators of the currency's home locale
    fn separators(&self) -> (char, char) {
        match self {
            Currency::Rub => ('\u{a0}', ','), // 1 234,56 ₽
            Currency::Usd => (',', '.'),      // $1,234.56
            Currency::Eur => ('.', ','),      // 1.234,56 €
            Currency::Cny => (',', '.'),      // ¥1,234.56
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Convert a RUB amount into the display currency.
///
/// `rate` is units of `currency` per one RUB; RUB itself ignores it.
pub fn convert_from_rub(amount_rub: f64, currency: Currency, rate: f64) -> f64 {
    match currency {
        Currency::Rub => amount_rub,
        _ => amount_rub * rate,
    }
}

/// Format an amount (already in the display currency) with two decimals,
/// locale grouping and the currency symbol.
pub fn format_amount(amount: f64, currency: Currency) -> String {
    let (group_sep, decimal_sep) = currency.separators();

    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    // Group the integer part in triads
    let digits = whole.to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(group_sep);
        }
        grouped.push(ch);
    }
    let grouped: String = grouped.chars().rev().collect();

    let sign = if negative { "-" } else { "" };
    let number = format!("{}{}{}{:02}", sign, grouped, decimal_sep, frac);

    match currency.symbol_position() {
        SymbolPosition::Before => format!("{}{}", currency.symbol(), number),
        SymbolPosition::After => format!("{} {}", number, currency.symbol()),
    }
}

/// Parse a user-typed amount: strips everything but digits and
/// separators, treats a comma as a decimal point.
pub fn parse_amount(value: &str) -> f64 {
    let cleaned: String = value
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    cleaned.parse().unwrap_or(0.0)
}

/// Built-in fallback rates (units per RUB), used until a refresh succeeds
pub fn default_rate(currency: Currency) -> f64 {
    match currency {
        Currency::Rub => 1.0,
        Currency::Usd => 0.011,
        Currency::Eur => 0.010,
        Currency::Cny => 0.078,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip() {
        for c in Currency::all() {
            assert_eq!(Currency::from_code(c.code()), Some(c));
        }
        assert_eq!(Currency::from_code("GBP"), None);
    }

    #[test]
    fn test_format_symbol_position() {
        assert_eq!(format_amount(1234.5, Currency::Usd), "$1,234.50");
        assert_eq!(format_amount(1234.5, Currency::Cny), "¥1,234.50");
        assert_eq!(format_amount(1234.5, Currency::Eur), "1.234,50 €");
        assert_eq!(format_amount(1234.5, Currency::Rub), "1\u{a0}234,50 ₽");
    }

    #[test]
    fn test_format_rounding_and_negatives() {
        assert_eq!(format_amount(0.005, Currency::Usd), "$0.01");
        assert_eq!(format_amount(-42.0, Currency::Usd), "$-42.00");
    }

    #[test]
    fn test_convert_from_rub() {
        assert_eq!(convert_from_rub(1000.0, Currency::Rub, 0.5), 1000.0);
        assert_eq!(convert_from_rub(1000.0, Currency::Usd, 0.011), 11.0);
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("1234.56"), 1234.56);
        assert_eq!(parse_amount("1234,56 ₽"), 1234.56);
        assert_eq!(parse_amount("$99"), 99.0);
        assert_eq!(parse_amount("not a number"), 0.0);
    }
}
