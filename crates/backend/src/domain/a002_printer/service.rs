use super::repository;
use crate::shared::error::ServiceError;
use chrono::Utc;
use contracts::domain::a002_printer::aggregate::{Printer, PrinterDto};
use uuid::Uuid;

pub async fn create(dto: PrinterDto) -> anyhow::Result<Uuid> {
    let code = dto
        .code
        .clone()
        .unwrap_or_else(|| format!("PRN-{}", Uuid::new_v4()));
    let mut aggregate = Printer::new_for_insert(code, &dto);

    aggregate
        .validate()
        .map_err(ServiceError::Validation)?;
    aggregate.before_write();

    repository::insert(&aggregate).await
}

pub async fn update(dto: PrinterDto) -> anyhow::Result<()> {
    let id = dto
        .id
        .as_ref()
        .and_then(|s| Uuid::parse_str(s).ok())
        .ok_or_else(|| ServiceError::BadRequest("Invalid ID".into()))?;

    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or(ServiceError::NotFound)?;

    aggregate.apply(&dto);

    aggregate
        .validate()
        .map_err(ServiceError::Validation)?;
    aggregate.before_write();

    repository::update(&aggregate).await
}

pub async fn delete(id: Uuid) -> anyhow::Result<bool> {
    repository::soft_delete(id).await
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Printer>> {
    repository::get_by_id(id).await
}

pub async fn list_all() -> anyhow::Result<Vec<Printer>> {
    repository::list_all().await
}

/// Record a maintenance pass on the printer: stamps the date and resets
/// the hours window. Called by the maintenance-log service.
pub async fn mark_maintained(id: Uuid) -> anyhow::Result<Printer> {
    let mut printer = repository::get_by_id(id)
        .await?
        .ok_or(ServiceError::NotFound)?;

    printer.last_maintenance_at = Some(Utc::now());
    printer.hours_at_last_maintenance = printer.total_print_hours;
    printer.before_write();

    repository::update(&printer).await?;
    Ok(printer)
}

/// Seed a small fleet for demo databases
pub async fn insert_test_data() -> anyhow::Result<()> {
    let samples = [
        ("Prusa MK4", Some("Original Prusa MK4"), 120.0, 240.0, 250.0),
        ("Bambu X1C", Some("Bambu Lab X1 Carbon"), 150.0, 350.0, 300.0),
    ];

    for (name, model, rate, watts, interval) in samples {
        let dto = PrinterDto {
            description: name.to_string(),
            model: model.map(|s| s.to_string()),
            hourly_rate: rate,
            power_consumption_watts: watts,
            electricity_cost_per_kwh: 6.0,
            maintenance_interval_hours: interval,
            ..PrinterDto::default()
        };
        create(dto).await?;
    }
    Ok(())
}
