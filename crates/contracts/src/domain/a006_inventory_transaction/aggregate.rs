use crate::domain::common::{
    AggregateId, AggregateRoot, BaseAggregate, EntityMetadata, EventStore,
};
use crate::enums::TransactionKind;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InventoryTransactionId(pub Uuid);

impl InventoryTransactionId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for InventoryTransactionId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(InventoryTransactionId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================
/// One material stock movement. Movements are append-only; the material's
/// `current_stock_grams` is the running result of applying them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryTransaction {
    #[serde(flatten)]
    pub base: BaseAggregate<InventoryTransactionId>,

    #[serde(rename = "materialId")]
    pub material_id: String,
    pub kind: TransactionKind,
    #[serde(rename = "amountGrams")]
    pub amount_grams: f64,
    #[serde(rename = "orderId")]
    pub order_id: Option<String>,
}

impl InventoryTransaction {
    pub fn new_for_insert(code: String, dto: &InventoryTransactionDto) -> Self {
        let description = format!("{} {}g", dto.kind, dto.amount_grams);
        let mut base = BaseAggregate::new(InventoryTransactionId::new_v4(), code, description);
        base.comment = dto.notes.clone();

        Self {
            base,
            material_id: dto.material_id.clone(),
            kind: dto.kind,
            amount_grams: dto.amount_grams,
            order_id: dto.order_id.clone(),
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Signed stock delta of this movement
    pub fn stock_delta(&self) -> f64 {
        self.kind.stock_sign() * self.amount_grams
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.material_id.trim().is_empty() {
            return Err("Material is required".into());
        }
        if !(self.amount_grams > 0.0) {
            return Err("Amount must be positive".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for InventoryTransaction {
    type Id = InventoryTransactionId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn code(&self) -> &str {
        &self.base.code
    }

    fn description(&self) -> &str {
        &self.base.description
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.base.metadata
    }

    fn events(&self) -> &EventStore {
        &self.base.events
    }

    fn events_mut(&mut self) -> &mut EventStore {
        &mut self.base.events
    }

    fn aggregate_index() -> &'static str {
        "a006"
    }

    fn collection_name() -> &'static str {
        "inventory_transaction"
    }

    fn element_name() -> &'static str {
        "Stock movement"
    }

    fn list_name() -> &'static str {
        "Stock movements"
    }
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryTransactionDto {
    #[serde(rename = "materialId")]
    pub material_id: String,
    pub kind: TransactionKind,
    #[serde(rename = "amountGrams")]
    pub amount_grams: f64,
    #[serde(rename = "orderId")]
    pub order_id: Option<String>,
    pub notes: Option<String>,
}

impl Default for InventoryTransactionDto {
    fn default() -> Self {
        Self {
            material_id: String::new(),
            kind: TransactionKind::Purchase,
            amount_grams: 0.0,
            order_id: None,
            notes: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_delta() {
        let mut dto = InventoryTransactionDto {
            material_id: Uuid::new_v4().to_string(),
            kind: TransactionKind::Purchase,
            amount_grams: 500.0,
            ..InventoryTransactionDto::default()
        };
        let tx = InventoryTransaction::new_for_insert("TRX-1".into(), &dto);
        assert_eq!(tx.stock_delta(), 500.0);
        assert!(tx.validate().is_ok());

        dto.kind = TransactionKind::Consumption;
        let tx = InventoryTransaction::new_for_insert("TRX-2".into(), &dto);
        assert_eq!(tx.stock_delta(), -500.0);
    }

    #[test]
    fn test_validate_rejects_zero_amount() {
        let dto = InventoryTransactionDto {
            material_id: Uuid::new_v4().to_string(),
            amount_grams: 0.0,
            ..InventoryTransactionDto::default()
        };
        let tx = InventoryTransaction::new_for_insert("TRX-1".into(), &dto);
        assert!(tx.validate().is_err());
    }
}
