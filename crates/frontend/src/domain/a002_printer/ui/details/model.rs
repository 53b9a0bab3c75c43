use crate::shared::fetch;
use contracts::domain::a002_printer::aggregate::{Printer, PrinterDto};

pub async fn fetch_by_id(id: String) -> Result<Printer, String> {
    fetch::get_json(&format!("/api/printer/{}", id)).await
}

pub async fn save_form(dto: &PrinterDto) -> Result<(), String> {
    let _: serde_json::Value = fetch::post_json("/api/printer", dto).await?;
    Ok(())
}
