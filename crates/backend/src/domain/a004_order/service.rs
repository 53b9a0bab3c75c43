use super::repository;
use crate::shared::error::ServiceError;
use crate::domain::a003_part;
use chrono::{NaiveTime, Utc};
use contracts::domain::a004_order::aggregate::{
    format_order_number, CustomerInfo, Order, OrderDto, OrderLine,
};
use contracts::enums::OrderStatus;
use uuid::Uuid;

/// Next `ORD-YYYYMMDD-NNN` number: 1 + orders already created today (UTC).
async fn next_order_number() -> anyhow::Result<String> {
    let today = Utc::now().date_naive();
    let midnight = today
        .and_time(NaiveTime::MIN)
        .and_utc();
    let created_today = repository::count_created_since(midnight).await?;
    Ok(format_order_number(today, created_today as u32 + 1))
}

/// Create an order: resolve each part, snapshot its current suggested
/// price, compute the totals and assign the day's order number.
pub async fn create(dto: OrderDto) -> anyhow::Result<Uuid> {
    if dto.parts.is_empty() {
        return Err(ServiceError::Validation("Order must have at least one part".into()).into());
    }

    let mut lines = Vec::with_capacity(dto.parts.len());
    for line in &dto.parts {
        let part_id = Uuid::parse_str(&line.part_id)
            .map_err(|_| ServiceError::BadRequest(format!("Invalid part ID: {}", line.part_id)))?;
        let part = a003_part::repository::get_by_id(part_id)
            .await?
            .ok_or_else(|| {
                ServiceError::Validation(format!("Part not found: {}", line.part_id))
            })?;
        lines.push(OrderLine {
            part_id: line.part_id.clone(),
            part_name: part.base.description.clone(),
            quantity: line.quantity,
            price_at_order: part.suggested_price,
        });
    }

    let customer = CustomerInfo {
        name: dto.customer_name.clone(),
        phone: dto.customer_phone.clone().filter(|s| !s.trim().is_empty()),
        email: dto.customer_email.clone().filter(|s| !s.trim().is_empty()),
        telegram: dto
            .customer_telegram
            .clone()
            .filter(|s| !s.trim().is_empty()),
    };

    let order_number = next_order_number().await?;
    let mut order = Order::new_for_insert(order_number, customer, lines, dto.markup, dto.notes)
        .map_err(|e| ServiceError::Validation(e.to_string()))?;

    order
        .validate()
        .map_err(ServiceError::Validation)?;
    order.before_write();

    repository::insert(&order).await
}

/// Move an order to a status; the matching timestamp is stamped on first
/// entry into that status.
pub async fn set_status(id: Uuid, status: OrderStatus) -> anyhow::Result<Order> {
    let mut order = repository::get_by_id(id)
        .await?
        .ok_or(ServiceError::NotFound)?;

    order.set_status(status);
    order.before_write();

    repository::update(&order).await?;
    Ok(order)
}

pub async fn delete(id: Uuid) -> anyhow::Result<bool> {
    repository::soft_delete(id).await
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Order>> {
    repository::get_by_id(id).await
}

pub async fn list(
    status: Option<OrderStatus>,
    limit: Option<u64>,
) -> anyhow::Result<Vec<Order>> {
    repository::list(status, limit).await
}
