use crate::shared::fetch;
use contracts::domain::a001_material::aggregate::{Material, MaterialDto};

pub async fn fetch_by_id(id: String) -> Result<Material, String> {
    fetch::get_json(&format!("/api/material/{}", id)).await
}

pub async fn save_form(dto: &MaterialDto) -> Result<(), String> {
    let _: serde_json::Value = fetch::post_json("/api/material", dto).await?;
    Ok(())
}
