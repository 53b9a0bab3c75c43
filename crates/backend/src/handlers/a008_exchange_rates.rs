use axum::extract::State;
use axum::Json;
use std::sync::Arc;

use crate::domain::a008_exchange_rates;
use crate::shared::error::ServiceError;
use crate::shared::rates::RatesProvider;
use contracts::domain::a008_exchange_rates::ExchangeRates;

/// GET /api/exchange-rates
pub async fn get() -> Result<Json<ExchangeRates>, ServiceError> {
    let rates = a008_exchange_rates::service::get()
        .await
        .map_err(ServiceError::from)?;
    Ok(Json(rates))
}

/// POST /api/exchange-rates (manual override)
pub async fn save(Json(rates): Json<ExchangeRates>) -> Result<Json<ExchangeRates>, ServiceError> {
    let saved = a008_exchange_rates::service::save(rates)
        .await
        .map_err(ServiceError::from)?;
    Ok(Json(saved))
}

/// POST /api/exchange-rates/refresh
///
/// Pulls fresh quotes from the configured endpoint. A provider failure
/// keeps the stored rates.
pub async fn refresh(
    State(provider): State<Arc<dyn RatesProvider>>,
) -> Result<Json<ExchangeRates>, ServiceError> {
    match a008_exchange_rates::service::refresh(provider.as_ref()).await {
        Ok(rates) => Ok(Json(rates)),
        Err(e) => {
            tracing::warn!("Exchange rate refresh failed: {:#}", e);
            // Surface what the client should keep using
            let current = a008_exchange_rates::service::get()
                .await
                .map_err(ServiceError::from)?;
            Ok(Json(current))
        }
    }
}
