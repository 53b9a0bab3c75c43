use super::repository;
use crate::shared::error::ServiceError;
use contracts::domain::a001_material::aggregate::{Material, MaterialDto};
use contracts::enums::MaterialType;
use uuid::Uuid;

pub async fn create(dto: MaterialDto) -> anyhow::Result<Uuid> {
    let code = dto
        .code
        .clone()
        .unwrap_or_else(|| format!("MAT-{}", Uuid::new_v4()));
    let mut aggregate = Material::new_for_insert(code, &dto);

    aggregate
        .validate()
        .map_err(ServiceError::Validation)?;
    aggregate.before_write();

    repository::insert(&aggregate).await
}

pub async fn update(dto: MaterialDto) -> anyhow::Result<()> {
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

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Material>> {
    repository::get_by_id(id).await
}

pub async fn list_all() -> anyhow::Result<Vec<Material>> {
    repository::list_all().await
}

pub async fn list_low_stock() -> anyhow::Result<Vec<Material>> {
    repository::list_low_stock().await
}

/// Seed a couple of typical spools for demo databases
pub async fn insert_test_data() -> anyhow::Result<()> {
    let samples = [
        ("Prusament PLA Galaxy Black", MaterialType::Pla, 2.6, 980.0, 200.0),
        ("eSUN PETG Transparent", MaterialType::Petg, 1.9, 420.0, 150.0),
        ("BambuLab TPU 95A Gray", MaterialType::Tpu, 4.1, 730.0, 100.0),
    ];

    for (name, material_type, cost, stock, threshold) in samples {
        let dto = MaterialDto {
            description: name.to_string(),
            material_type,
            cost_per_gram: cost,
            current_stock_grams: stock,
            low_stock_threshold: threshold,
            ..MaterialDto::default()
        };
        create(dto).await?;
    }
    Ok(())
}
