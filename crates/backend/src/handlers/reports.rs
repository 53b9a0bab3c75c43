use axum::extract::Query;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use serde::Deserialize;

use crate::domain::a004_order;
use crate::shared::error::ServiceError;
use contracts::domain::a004_order::aggregate::Order;

#[derive(Debug, Deserialize)]
pub struct ReportQuery {
    /// Inclusive start date, YYYY-MM-DD (UTC); open when absent
    pub from: Option<String>,
    /// Inclusive end date, YYYY-MM-DD (UTC); open when absent
    pub to: Option<String>,
}

fn parse_day(raw: &str) -> Result<NaiveDate, ServiceError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| ServiceError::BadRequest(format!("Invalid date: {}", raw)))
}

fn day_start(day: NaiveDate) -> DateTime<Utc> {
    day.and_time(NaiveTime::MIN).and_utc()
}

/// GET /api/reports/orders.csv?from=YYYY-MM-DD&to=YYYY-MM-DD
pub async fn orders_csv(
    Query(query): Query<ReportQuery>,
) -> Result<impl IntoResponse, ServiceError> {
    let from = match query.from.as_deref() {
        Some(raw) => day_start(parse_day(raw)?),
        None => day_start(NaiveDate::from_ymd_opt(1970, 1, 1).expect("epoch date")),
    };
    let to = match query.to.as_deref() {
        // `to` is inclusive: cut at the start of the following day
        Some(raw) => day_start(parse_day(raw)?) + Duration::days(1),
        None => Utc::now(),
    };
    if from >= to {
        return Err(ServiceError::BadRequest("Empty date range".into()));
    }

    let orders = a004_order::repository::list_created_between(from, to)
        .await
        .map_err(ServiceError::from)?;

    let body = build_orders_csv(&orders).map_err(ServiceError::from)?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"orders.csv\"".to_string(),
            ),
        ],
        body,
    ))
}

/// Render orders as CSV, newest first, amounts in RUB with two decimals
fn build_orders_csv(orders: &[Order]) -> anyhow::Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([
        "order_number",
        "created_at",
        "customer",
        "status",
        "items",
        "subtotal",
        "markup",
        "total",
    ])?;

    for order in orders {
        let items: u32 = order.lines.iter().map(|l| l.quantity).sum();
        writer.write_record([
            order.order_number().to_string(),
            order
                .base
                .metadata
                .created_at
                .format("%Y-%m-%d %H:%M:%S")
                .to_string(),
            order.customer_name.clone(),
            order.status.code().to_string(),
            items.to_string(),
            format!("{:.2}", order.subtotal),
            format!("{:.2}", order.markup),
            format!("{:.2}", order.total),
        ])?;
    }

    let bytes = writer.into_inner()?;
    Ok(String::from_utf8(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a004_order::aggregate::{CustomerInfo, OrderLine};

    fn order() -> Order {
        Order::new_for_insert(
            "ORD-20250301-001".into(),
            CustomerInfo {
                name: "Ivan Petrov".into(),
                ..CustomerInfo::default()
            },
            vec![OrderLine {
                part_id: uuid::Uuid::new_v4().to_string(),
                part_name: "Case".into(),
                quantity: 2,
                price_at_order: 325.0,
            }],
            10.0,
            None,
        )
        .unwrap()
    }

    #[test]
    fn test_build_orders_csv() {
        let csv_text = build_orders_csv(&[order()]).unwrap();
        let mut lines = csv_text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "order_number,created_at,customer,status,items,subtotal,markup,total"
        );
        let row = lines.next().unwrap();
        assert!(row.starts_with("ORD-20250301-001,"));
        assert!(row.ends_with(",new,2,650.00,65.00,715.00"));
    }

    #[test]
    fn test_build_orders_csv_empty() {
        let csv_text = build_orders_csv(&[]).unwrap();
        assert_eq!(csv_text.lines().count(), 1);
    }

    #[test]
    fn test_parse_day() {
        assert!(parse_day("2025-03-01").is_ok());
        assert!(parse_day("03/01/2025").is_err());
    }
}
