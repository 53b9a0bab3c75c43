use axum::extract::{Path, Query};
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use crate::domain::a003_part;
use crate::shared::error::ServiceError;
use contracts::domain::a003_part::aggregate::{Part, PartDto};

#[derive(Debug, Deserialize)]
pub struct PartListQuery {
    /// Narrow the list to parts printed from one material
    pub material_id: Option<String>,
}

/// GET /api/part?material_id=...
pub async fn list(
    Query(query): Query<PartListQuery>,
) -> Result<Json<Vec<Part>>, ServiceError> {
    let material_id = match query.material_id.as_deref() {
        Some(raw) => Some(
            uuid::Uuid::parse_str(raw)
                .map_err(|_| ServiceError::BadRequest("Invalid material_id".into()))?,
        ),
        None => None,
    };
    let items = a003_part::service::list(material_id)
        .await
        .map_err(ServiceError::from)?;
    Ok(Json(items))
}

/// GET /api/part/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<Part>, ServiceError> {
    let uuid = uuid::Uuid::parse_str(&id)
        .map_err(|_| ServiceError::BadRequest("Invalid ID".into()))?;
    let item = a003_part::service::get_by_id(uuid)
        .await
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)?;
    Ok(Json(item))
}

/// POST /api/part
pub async fn upsert(Json(dto): Json<PartDto>) -> Result<Json<serde_json::Value>, ServiceError> {
    let result = if dto.id.is_some() {
        a003_part::service::update(dto)
            .await
            .map(|_| uuid::Uuid::nil().to_string())
    } else {
        a003_part::service::create(dto)
            .await
            .map(|id| id.to_string())
    };

    let id = result.map_err(ServiceError::from)?;
    Ok(Json(json!({ "id": id })))
}

/// DELETE /api/part/:id
pub async fn delete(Path(id): Path<String>) -> Result<(), ServiceError> {
    let uuid = uuid::Uuid::parse_str(&id)
        .map_err(|_| ServiceError::BadRequest("Invalid ID".into()))?;
    let deleted = a003_part::service::delete(uuid)
        .await
        .map_err(ServiceError::from)?;
    if deleted {
        Ok(())
    } else {
        Err(ServiceError::NotFound)
    }
}
