use axum::extract::Query;
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use crate::domain::a006_inventory_transaction;
use crate::shared::error::ServiceError;
use contracts::domain::a006_inventory_transaction::aggregate::{
    InventoryTransaction, InventoryTransactionDto,
};

#[derive(Debug, Deserialize)]
pub struct InventoryListQuery {
    pub material_id: Option<String>,
    pub order_id: Option<String>,
}

/// GET /api/inventory?material_id=...&order_id=...
pub async fn list(
    Query(query): Query<InventoryListQuery>,
) -> Result<Json<Vec<InventoryTransaction>>, ServiceError> {
    let material_id = match query.material_id.as_deref() {
        Some(raw) => Some(
            uuid::Uuid::parse_str(raw)
                .map_err(|_| ServiceError::BadRequest("Invalid material_id".into()))?,
        ),
        None => None,
    };
    let order_id = match query.order_id.as_deref() {
        Some(raw) => Some(
            uuid::Uuid::parse_str(raw)
                .map_err(|_| ServiceError::BadRequest("Invalid order_id".into()))?,
        ),
        None => None,
    };
    let items = a006_inventory_transaction::service::list(material_id, order_id)
        .await
        .map_err(ServiceError::from)?;
    Ok(Json(items))
}

/// POST /api/inventory
pub async fn create(
    Json(dto): Json<InventoryTransactionDto>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    let id = a006_inventory_transaction::service::create(dto)
        .await
        .map_err(ServiceError::from)?;
    Ok(Json(json!({ "id": id.to_string() })))
}
