use crate::shared::fetch;
use contracts::domain::a003_part::aggregate::Part;
use contracts::domain::a004_order::aggregate::{Order, OrderDto, OrderStatusDto};
use contracts::enums::OrderStatus;

pub async fn fetch_by_id(id: String) -> Result<Order, String> {
    fetch::get_json(&format!("/api/order/{}", id)).await
}

pub async fn fetch_parts() -> Result<Vec<Part>, String> {
    fetch::get_json("/api/part").await
}

pub async fn create_order(dto: &OrderDto) -> Result<(), String> {
    let _: serde_json::Value = fetch::post_json("/api/order", dto).await?;
    Ok(())
}

pub async fn set_status(id: &str, status: OrderStatus) -> Result<Order, String> {
    fetch::post_json(
        &format!("/api/order/{}/status", id),
        &OrderStatusDto { status },
    )
    .await
}
