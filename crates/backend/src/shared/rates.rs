//! Outbound exchange-rate client.
//!
//! Quotes are RUB-based (units of currency per one RUB), matching the
//! open.er-api.com response shape. A refresh failure is never fatal: the
//! previously stored or built-in rates stay in effect.

use async_trait::async_trait;

/// Freshly fetched RUB-based quotes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FetchedRates {
    pub usd: f64,
    pub eur: f64,
    pub cny: f64,
}

/// Source of exchange-rate quotes
#[async_trait]
pub trait RatesProvider: Send + Sync {
    async fn fetch(&self) -> anyhow::Result<FetchedRates>;
}

/// HTTP provider against the configured endpoint
pub struct HttpRatesProvider {
    url: String,
    client: reqwest::Client,
}

impl HttpRatesProvider {
    pub fn new(url: String) -> Self {
        Self {
            url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl RatesProvider for HttpRatesProvider {
    async fn fetch(&self) -> anyhow::Result<FetchedRates> {
        let payload: serde_json::Value = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        parse_rates_payload(&payload)
    }
}

/// Extract USD/EUR/CNY quotes from an open.er-api.com style payload:
/// `{ "base_code": "RUB", "rates": { "USD": 0.011, ... } }`
pub fn parse_rates_payload(payload: &serde_json::Value) -> anyhow::Result<FetchedRates> {
    if let Some(base) = payload.get("base_code").and_then(|v| v.as_str()) {
        if base != "RUB" {
            anyhow::bail!("unexpected base currency: {}", base);
        }
    }

    let rates = payload
        .get("rates")
        .and_then(|v| v.as_object())
        .ok_or_else(|| anyhow::anyhow!("payload has no rates object"))?;

    let quote = |code: &str| -> anyhow::Result<f64> {
        let value = rates
            .get(code)
            .and_then(|v| v.as_f64())
            .ok_or_else(|| anyhow::anyhow!("payload has no {} rate", code))?;
        if !(value > 0.0) {
            anyhow::bail!("{} rate is not positive", code);
        }
        Ok(value)
    };

    Ok(FetchedRates {
        usd: quote("USD")?,
        eur: quote("EUR")?,
        cny: quote("CNY")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_rates_payload() {
        let payload = json!({
            "result": "success",
            "base_code": "RUB",
            "rates": { "RUB": 1, "USD": 0.0112, "EUR": 0.0103, "CNY": 0.0795 }
        });
        let rates = parse_rates_payload(&payload).unwrap();
        assert_eq!(rates.usd, 0.0112);
        assert_eq!(rates.eur, 0.0103);
        assert_eq!(rates.cny, 0.0795);
    }

    #[test]
    fn test_parse_rejects_wrong_base() {
        let payload = json!({ "base_code": "USD", "rates": { "USD": 1 } });
        assert!(parse_rates_payload(&payload).is_err());
    }

    #[test]
    fn test_parse_rejects_missing_rate() {
        let payload = json!({ "base_code": "RUB", "rates": { "USD": 0.011, "EUR": 0.010 } });
        assert!(parse_rates_payload(&payload).is_err());
    }
}
