use super::repository;
use crate::shared::error::ServiceError;
use crate::domain::a001_material;
use contracts::domain::a006_inventory_transaction::aggregate::{
    InventoryTransaction, InventoryTransactionDto,
};
use uuid::Uuid;

/// Record a stock movement and apply it to the material's stock level.
/// Stock floors at zero: consuming more than remains leaves an empty
/// spool, not a negative one.
pub async fn create(dto: InventoryTransactionDto) -> anyhow::Result<Uuid> {
    let material_id = Uuid::parse_str(&dto.material_id)
        .map_err(|_| ServiceError::BadRequest("Invalid material ID".into()))?;
    let material = a001_material::repository::get_by_id(material_id)
        .await?
        .ok_or_else(|| ServiceError::Validation("Material not found".into()))?;

    let code = format!("TRX-{}", Uuid::new_v4());
    let mut tx = InventoryTransaction::new_for_insert(code, &dto);

    tx.validate()
        .map_err(ServiceError::Validation)?;
    tx.before_write();

    let id = repository::insert(&tx).await?;

    let new_stock = (material.current_stock_grams + tx.stock_delta()).max(0.0);
    a001_material::repository::set_stock(material_id, new_stock).await?;

    Ok(id)
}

pub async fn list(
    material_id: Option<Uuid>,
    order_id: Option<Uuid>,
) -> anyhow::Result<Vec<InventoryTransaction>> {
    repository::list(material_id, order_id).await
}
