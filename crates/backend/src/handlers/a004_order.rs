use axum::extract::{Path, Query};
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use crate::domain::a004_order;
use crate::shared::error::ServiceError;
use contracts::domain::a004_order::aggregate::{Order, OrderDto, OrderStatusDto};
use contracts::enums::OrderStatus;

#[derive(Debug, Deserialize)]
pub struct OrderListQuery {
    pub status: Option<String>,
    pub limit: Option<u64>,
}

/// GET /api/order?status=...&limit=...
pub async fn list(
    Query(query): Query<OrderListQuery>,
) -> Result<Json<Vec<Order>>, ServiceError> {
    let status = match query.status.as_deref() {
        Some(raw) => Some(
            OrderStatus::from_code(raw)
                .ok_or_else(|| ServiceError::BadRequest(format!("Unknown status: {}", raw)))?,
        ),
        None => None,
    };
    let items = a004_order::service::list(status, query.limit)
        .await
        .map_err(ServiceError::from)?;
    Ok(Json(items))
}

/// GET /api/order/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<Order>, ServiceError> {
    let uuid = uuid::Uuid::parse_str(&id)
        .map_err(|_| ServiceError::BadRequest("Invalid ID".into()))?;
    let item = a004_order::service::get_by_id(uuid)
        .await
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)?;
    Ok(Json(item))
}

/// POST /api/order
pub async fn create(Json(dto): Json<OrderDto>) -> Result<Json<serde_json::Value>, ServiceError> {
    let id = a004_order::service::create(dto)
        .await
        .map_err(ServiceError::from)?;
    Ok(Json(json!({ "id": id.to_string() })))
}

/// POST /api/order/:id/status
pub async fn set_status(
    Path(id): Path<String>,
    Json(dto): Json<OrderStatusDto>,
) -> Result<Json<Order>, ServiceError> {
    let uuid = uuid::Uuid::parse_str(&id)
        .map_err(|_| ServiceError::BadRequest("Invalid ID".into()))?;
    let order = a004_order::service::set_status(uuid, dto.status)
        .await
        .map_err(ServiceError::from)?;
    Ok(Json(order))
}

/// DELETE /api/order/:id
pub async fn delete(Path(id): Path<String>) -> Result<(), ServiceError> {
    let uuid = uuid::Uuid::parse_str(&id)
        .map_err(|_| ServiceError::BadRequest("Invalid ID".into()))?;
    let deleted = a004_order::service::delete(uuid)
        .await
        .map_err(ServiceError::from)?;
    if deleted {
        Ok(())
    } else {
        Err(ServiceError::NotFound)
    }
}
