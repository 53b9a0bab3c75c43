use axum::Json;

use crate::dashboards::d100_workshop_summary;
use crate::shared::error::ServiceError;
use contracts::dashboards::d100_workshop_summary::WorkshopSummaryResponse;

/// GET /api/d100/workshop-summary
pub async fn get_summary() -> Result<Json<WorkshopSummaryResponse>, ServiceError> {
    let summary = d100_workshop_summary::service::get_workshop_summary()
        .await
        .map_err(ServiceError::from)?;
    Ok(Json(summary))
}
