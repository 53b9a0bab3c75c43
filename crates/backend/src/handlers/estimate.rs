use axum::Json;
use uuid::Uuid;

use crate::domain::{a001_material, a002_printer};
use crate::shared::error::ServiceError;
use contracts::shared::costing::{self, CostInput, FALLBACK_HOURLY_RATE};
use contracts::usecases::u100_estimate::{EstimateRequest, EstimateResponse};

/// POST /api/estimate
///
/// What-if quote over the costing module; nothing is persisted.
pub async fn calculate(
    Json(request): Json<EstimateRequest>,
) -> Result<Json<EstimateResponse>, ServiceError> {
    let material_id = Uuid::parse_str(&request.material_id)
        .map_err(|_| ServiceError::BadRequest("Invalid material ID".into()))?;
    let material = a001_material::repository::get_by_id(material_id)
        .await
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)?;

    let hourly_rate = a002_printer::repository::first_active()
        .await
        .map_err(ServiceError::from)?
        .map(|p| p.hourly_rate)
        .unwrap_or(FALLBACK_HOURLY_RATE);

    let breakdown = costing::calculate_part_cost(&CostInput {
        weight_grams: request.weight_grams,
        print_time_minutes: request.print_time_minutes,
        material_cost_per_gram: material.cost_per_gram,
        printer_hourly_rate: hourly_rate,
    })
    .map_err(|e| ServiceError::Validation(e.to_string()))?;

    Ok(Json(EstimateResponse {
        material_cost: breakdown.material_cost,
        print_cost: breakdown.print_cost,
        base_cost: breakdown.base_cost,
        suggested_price: breakdown.suggested_price(request.markup_percent),
        printer_hourly_rate: hourly_rate,
    }))
}
