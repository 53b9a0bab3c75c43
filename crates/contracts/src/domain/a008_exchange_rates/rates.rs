use crate::shared::currency::{self, Currency};
use serde::{Deserialize, Serialize};

/// Cached display rates, RUB base (units of currency per one RUB).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRates {
    pub usd: f64,
    pub eur: f64,
    pub cny: f64,
    /// When the rates were last fetched; `None` for the built-in defaults
    #[serde(rename = "fetchedAt")]
    pub fetched_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl ExchangeRates {
    /// Rate for a display currency (RUB is always 1.0)
    pub fn rate(&self, currency: Currency) -> f64 {
        match currency {
            Currency::Rub => 1.0,
            Currency::Usd => self.usd,
            Currency::Eur => self.eur,
            Currency::Cny => self.cny,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(self.usd > 0.0 && self.eur > 0.0 && self.cny > 0.0) {
            return Err("Exchange rates must be positive".into());
        }
        Ok(())
    }
}

impl Default for ExchangeRates {
    fn default() -> Self {
        Self {
            usd: currency::default_rate(Currency::Usd),
            eur: currency::default_rate(Currency::Eur),
            cny: currency::default_rate(Currency::Cny),
            fetched_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_currency_table() {
        let rates = ExchangeRates::default();
        assert_eq!(rates.rate(Currency::Rub), 1.0);
        assert_eq!(rates.rate(Currency::Usd), 0.011);
        assert_eq!(rates.rate(Currency::Eur), 0.010);
        assert_eq!(rates.rate(Currency::Cny), 0.078);
        assert!(rates.fetched_at.is_none());
        assert!(rates.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_rate() {
        let mut rates = ExchangeRates::default();
        rates.usd = 0.0;
        assert!(rates.validate().is_err());
    }
}
