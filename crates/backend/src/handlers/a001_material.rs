use axum::{extract::Path, Json};
use serde_json::json;

use crate::domain::a001_material;
use crate::shared::error::ServiceError;
use contracts::domain::a001_material::aggregate::{Material, MaterialDto};

/// GET /api/material
pub async fn list_all() -> Result<Json<Vec<Material>>, ServiceError> {
    let items = a001_material::service::list_all()
        .await
        .map_err(ServiceError::from)?;
    Ok(Json(items))
}

/// GET /api/material/low-stock
pub async fn list_low_stock() -> Result<Json<Vec<Material>>, ServiceError> {
    let items = a001_material::service::list_low_stock()
        .await
        .map_err(ServiceError::from)?;
    Ok(Json(items))
}

/// GET /api/material/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<Material>, ServiceError> {
    let uuid = uuid::Uuid::parse_str(&id)
        .map_err(|_| ServiceError::BadRequest("Invalid ID".into()))?;
    let item = a001_material::service::get_by_id(uuid)
        .await
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)?;
    Ok(Json(item))
}

/// POST /api/material
pub async fn upsert(Json(dto): Json<MaterialDto>) -> Result<Json<serde_json::Value>, ServiceError> {
    let result = if dto.id.is_some() {
        a001_material::service::update(dto)
            .await
            .map(|_| uuid::Uuid::nil().to_string())
    } else {
        a001_material::service::create(dto)
            .await
            .map(|id| id.to_string())
    };

    let id = result.map_err(ServiceError::from)?;
    Ok(Json(json!({ "id": id })))
}

/// DELETE /api/material/:id
pub async fn delete(Path(id): Path<String>) -> Result<(), ServiceError> {
    let uuid = uuid::Uuid::parse_str(&id)
        .map_err(|_| ServiceError::BadRequest("Invalid ID".into()))?;
    let deleted = a001_material::service::delete(uuid)
        .await
        .map_err(ServiceError::from)?;
    if deleted {
        Ok(())
    } else {
        Err(ServiceError::NotFound)
    }
}

/// POST /api/material/testdata
pub async fn insert_test_data() -> Result<(), ServiceError> {
    a001_material::service::insert_test_data()
        .await
        .map_err(ServiceError::from)?;
    Ok(())
}
