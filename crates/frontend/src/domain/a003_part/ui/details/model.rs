use crate::shared::fetch;
use contracts::domain::a001_material::aggregate::Material;
use contracts::domain::a003_part::aggregate::{Part, PartDto};

pub async fn fetch_by_id(id: String) -> Result<Part, String> {
    fetch::get_json(&format!("/api/part/{}", id)).await
}

pub async fn fetch_materials() -> Result<Vec<Material>, String> {
    fetch::get_json("/api/material").await
}

pub async fn save_form(dto: &PartDto) -> Result<(), String> {
    let _: serde_json::Value = fetch::post_json("/api/part", dto).await?;
    Ok(())
}
