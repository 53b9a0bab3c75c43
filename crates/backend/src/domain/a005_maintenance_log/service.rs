use super::repository;
use crate::shared::error::ServiceError;
use crate::domain::a002_printer;
use contracts::domain::a005_maintenance_log::aggregate::{MaintenanceLog, MaintenanceLogDto};
use uuid::Uuid;

/// Record a maintenance pass: writes the journal entry with the printer's
/// current odometer and stamps the printer itself.
pub async fn create(dto: MaintenanceLogDto) -> anyhow::Result<Uuid> {
    let printer_id = Uuid::parse_str(&dto.printer_id)
        .map_err(|_| ServiceError::BadRequest("Invalid printer ID".into()))?;
    let printer = a002_printer::repository::get_by_id(printer_id)
        .await?
        .ok_or(ServiceError::NotFound)?;

    let code = format!("MNT-{}", Uuid::new_v4());
    let mut log = MaintenanceLog::new_for_insert(code, &dto, printer.total_print_hours);

    log.validate()
        .map_err(ServiceError::Validation)?;
    log.before_write();

    let id = repository::insert(&log).await?;
    a002_printer::service::mark_maintained(printer_id).await?;
    Ok(id)
}

pub async fn delete(id: Uuid) -> anyhow::Result<bool> {
    repository::soft_delete(id).await
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<MaintenanceLog>> {
    repository::get_by_id(id).await
}

pub async fn list(printer_id: Option<Uuid>) -> anyhow::Result<Vec<MaintenanceLog>> {
    repository::list(printer_id).await
}
