use axum::{extract::Path, Json};
use serde_json::json;

use crate::domain::a002_printer;
use crate::shared::error::ServiceError;
use contracts::domain::a002_printer::aggregate::{Printer, PrinterDto};

/// GET /api/printer
pub async fn list_all() -> Result<Json<Vec<Printer>>, ServiceError> {
    let items = a002_printer::service::list_all()
        .await
        .map_err(ServiceError::from)?;
    Ok(Json(items))
}

/// GET /api/printer/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<Printer>, ServiceError> {
    let uuid = uuid::Uuid::parse_str(&id)
        .map_err(|_| ServiceError::BadRequest("Invalid ID".into()))?;
    let item = a002_printer::service::get_by_id(uuid)
        .await
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)?;
    Ok(Json(item))
}

/// POST /api/printer
pub async fn upsert(Json(dto): Json<PrinterDto>) -> Result<Json<serde_json::Value>, ServiceError> {
    let result = if dto.id.is_some() {
        a002_printer::service::update(dto)
            .await
            .map(|_| uuid::Uuid::nil().to_string())
    } else {
        a002_printer::service::create(dto)
            .await
            .map(|id| id.to_string())
    };

    let id = result.map_err(ServiceError::from)?;
    Ok(Json(json!({ "id": id })))
}

/// DELETE /api/printer/:id
pub async fn delete(Path(id): Path<String>) -> Result<(), ServiceError> {
    let uuid = uuid::Uuid::parse_str(&id)
        .map_err(|_| ServiceError::BadRequest("Invalid ID".into()))?;
    let deleted = a002_printer::service::delete(uuid)
        .await
        .map_err(ServiceError::from)?;
    if deleted {
        Ok(())
    } else {
        Err(ServiceError::NotFound)
    }
}

/// POST /api/printer/testdata
pub async fn insert_test_data() -> Result<(), ServiceError> {
    a002_printer::service::insert_test_data()
        .await
        .map_err(ServiceError::from)?;
    Ok(())
}
