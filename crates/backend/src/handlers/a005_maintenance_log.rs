use axum::extract::{Path, Query};
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use crate::domain::a005_maintenance_log;
use crate::shared::error::ServiceError;
use contracts::domain::a005_maintenance_log::aggregate::{MaintenanceLog, MaintenanceLogDto};

#[derive(Debug, Deserialize)]
pub struct MaintenanceListQuery {
    pub printer_id: Option<String>,
}

/// GET /api/maintenance_log?printer_id=...
pub async fn list(
    Query(query): Query<MaintenanceListQuery>,
) -> Result<Json<Vec<MaintenanceLog>>, ServiceError> {
    let printer_id = match query.printer_id.as_deref() {
        Some(raw) => Some(
            uuid::Uuid::parse_str(raw)
                .map_err(|_| ServiceError::BadRequest("Invalid printer_id".into()))?,
        ),
        None => None,
    };
    let items = a005_maintenance_log::service::list(printer_id)
        .await
        .map_err(ServiceError::from)?;
    Ok(Json(items))
}

/// GET /api/maintenance_log/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<MaintenanceLog>, ServiceError> {
    let uuid = uuid::Uuid::parse_str(&id)
        .map_err(|_| ServiceError::BadRequest("Invalid ID".into()))?;
    let item = a005_maintenance_log::service::get_by_id(uuid)
        .await
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)?;
    Ok(Json(item))
}

/// POST /api/maintenance_log
pub async fn create(
    Json(dto): Json<MaintenanceLogDto>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    let id = a005_maintenance_log::service::create(dto)
        .await
        .map_err(ServiceError::from)?;
    Ok(Json(json!({ "id": id.to_string() })))
}

/// DELETE /api/maintenance_log/:id
pub async fn delete(Path(id): Path<String>) -> Result<(), ServiceError> {
    let uuid = uuid::Uuid::parse_str(&id)
        .map_err(|_| ServiceError::BadRequest("Invalid ID".into()))?;
    let deleted = a005_maintenance_log::service::delete(uuid)
        .await
        .map_err(ServiceError::from)?;
    if deleted {
        Ok(())
    } else {
        Err(ServiceError::NotFound)
    }
}
