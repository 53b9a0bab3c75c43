use super::repository;
use crate::shared::error::ServiceError;
use crate::shared::rates::RatesProvider;
use chrono::Utc;
use contracts::domain::a008_exchange_rates::ExchangeRates;

/// Current rates; built-in defaults when no refresh has succeeded yet
pub async fn get() -> anyhow::Result<ExchangeRates> {
    Ok(repository::get().await?.unwrap_or_default())
}

/// Manual override of the stored rates
pub async fn save(mut rates: ExchangeRates) -> anyhow::Result<ExchangeRates> {
    rates
        .validate()
        .map_err(ServiceError::Validation)?;
    rates.fetched_at = Some(Utc::now());
    repository::save(&rates).await?;
    Ok(rates)
}

/// Fetch fresh quotes from the provider and store them. A provider
/// failure keeps the previous rates in effect and is reported upward.
pub async fn refresh(provider: &dyn RatesProvider) -> anyhow::Result<ExchangeRates> {
    let fetched = provider.fetch().await?;

    let rates = ExchangeRates {
        usd: fetched.usd,
        eur: fetched.eur,
        cny: fetched.cny,
        fetched_at: Some(Utc::now()),
    };
    rates
        .validate()
        .map_err(ServiceError::Validation)?;

    repository::save(&rates).await?;
    tracing::info!(
        "Exchange rates refreshed: USD {} EUR {} CNY {}",
        rates.usd,
        rates.eur,
        rates.cny
    );
    Ok(rates)
}
