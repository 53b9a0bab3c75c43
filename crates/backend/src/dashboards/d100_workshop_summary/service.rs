use anyhow::Result;
use chrono::{DateTime, Datelike, NaiveTime, Utc};
use contracts::dashboards::d100_workshop_summary::{OrdersByStatus, WorkshopSummaryResponse};
use contracts::enums::OrderStatus;

use crate::domain::{a001_material, a002_printer, a003_part, a004_order};

/// Assemble the workshop summary: month window aggregates over orders
/// plus catalog and fleet health counters.
pub async fn get_workshop_summary() -> Result<WorkshopSummaryResponse> {
    let now = Utc::now();
    let from = month_start(now);

    let orders = a004_order::repository::list_created_between(from, now).await?;
    let orders_this_month = orders.len() as u64;
    let revenue_this_month: f64 = orders.iter().map(|o| o.total).sum();
    let average_order_value = if orders_this_month > 0 {
        revenue_this_month / orders_this_month as f64
    } else {
        0.0
    };

    let total_parts = a003_part::repository::count_all().await?;

    let mut orders_by_status = OrdersByStatus::default();
    for (status, count) in a004_order::repository::count_by_status().await? {
        match status {
            OrderStatus::New => orders_by_status.new = count,
            OrderStatus::Printing => orders_by_status.printing = count,
            OrderStatus::Finished => orders_by_status.finished = count,
            OrderStatus::Delivered => orders_by_status.delivered = count,
        }
    }

    let low_stock_materials = a001_material::repository::list_low_stock().await?.len() as u64;

    let printers_due_maintenance = a002_printer::repository::list_all()
        .await?
        .iter()
        .filter(|p| p.is_active && p.is_maintenance_due())
        .count() as u64;

    Ok(WorkshopSummaryResponse {
        period: period_label(now),
        orders_this_month,
        revenue_this_month,
        average_order_value,
        total_parts,
        orders_by_status,
        low_stock_materials,
        printers_due_maintenance,
    })
}

/// First instant of the month containing `now` (UTC)
fn month_start(now: DateTime<Utc>) -> DateTime<Utc> {
    now.date_naive()
        .with_day(1)
        .expect("day 1 is valid for every month")
        .and_time(NaiveTime::MIN)
        .and_utc()
}

/// Period label in "YYYY-MM" form
fn period_label(now: DateTime<Utc>) -> String {
    format!("{:04}-{:02}", now.year(), now.month())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_month_start() {
        let now = Utc.with_ymd_and_hms(2025, 3, 15, 14, 30, 59).unwrap();
        let start = month_start(now);
        assert_eq!(
            start,
            Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_month_start_is_idempotent_on_first_day() {
        let now = Utc.with_ymd_and_hms(2025, 12, 1, 0, 0, 0).unwrap();
        assert_eq!(month_start(now), now);
    }

    #[test]
    fn test_period_label() {
        let now = Utc.with_ymd_and_hms(2025, 3, 15, 14, 30, 59).unwrap();
        assert_eq!(period_label(now), "2025-03");
    }
}
