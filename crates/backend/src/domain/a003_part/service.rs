use super::repository;
use crate::shared::error::ServiceError;
use crate::domain::{a001_material, a002_printer};
use contracts::domain::a003_part::aggregate::{Part, PartDto};
use contracts::shared::costing::FALLBACK_HOURLY_RATE;
use uuid::Uuid;

/// Hourly rate used to price the catalog: first active printer, or the
/// costing fallback when the fleet is empty.
async fn current_hourly_rate() -> anyhow::Result<f64> {
    Ok(a002_printer::repository::first_active()
        .await?
        .map(|p| p.hourly_rate)
        .unwrap_or(FALLBACK_HOURLY_RATE))
}

/// Fill in the derived cost columns from the part's material and the
/// fleet's hourly rate.
async fn recalculate(part: &mut Part) -> anyhow::Result<()> {
    let material_id = Uuid::parse_str(&part.material_id)
        .map_err(|_| ServiceError::BadRequest("Invalid material ID".into()))?;
    let material = a001_material::repository::get_by_id(material_id)
        .await?
        .ok_or_else(|| ServiceError::Validation("Material not found".into()))?;
    let hourly_rate = current_hourly_rate().await?;

    part.recalculate_costs(material.cost_per_gram, hourly_rate)?;
    Ok(())
}

pub async fn create(dto: PartDto) -> anyhow::Result<Uuid> {
    let code = dto
        .code
        .clone()
        .unwrap_or_else(|| format!("PRT-{}", Uuid::new_v4()));
    let mut aggregate = Part::new_for_insert(code, &dto);

    aggregate
        .validate()
        .map_err(ServiceError::Validation)?;
    recalculate(&mut aggregate).await?;
    aggregate.before_write();

    repository::insert(&aggregate).await
}

/// Update recomputes the stored cost columns from the current material
/// price and fleet rate.
pub async fn update(dto: PartDto) -> anyhow::Result<()> {
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
    recalculate(&mut aggregate).await?;
    aggregate.before_write();

    repository::update(&aggregate).await
}

pub async fn delete(id: Uuid) -> anyhow::Result<bool> {
    repository::soft_delete(id).await
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Part>> {
    repository::get_by_id(id).await
}

pub async fn list(material_id: Option<Uuid>) -> anyhow::Result<Vec<Part>> {
    repository::list(material_id).await
}
