use chrono::Utc;
use contracts::domain::a006_inventory_transaction::aggregate::{
    InventoryTransaction, InventoryTransactionId,
};
use contracts::domain::common::{BaseAggregate, EntityMetadata};
use contracts::enums::TransactionKind;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a006_inventory_transaction")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub code: String,
    pub description: String,
    pub comment: Option<String>,
    pub material_id: String,
    pub kind: String,
    pub amount_grams: f64,
    pub order_id: Option<String>,
    pub is_deleted: bool,
    pub is_posted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for InventoryTransaction {
    fn from(m: Model) -> Self {
        let metadata = EntityMetadata {
            created_at: m.created_at.unwrap_or_else(Utc::now),
            updated_at: m.updated_at.unwrap_or_else(Utc::now),
            is_deleted: m.is_deleted,
            is_posted: m.is_posted,
            version: m.version,
        };
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());

        InventoryTransaction {
            base: BaseAggregate::with_metadata(
                InventoryTransactionId(uuid),
                m.code,
                m.description,
                m.comment.clone(),
                metadata,
            ),
            material_id: m.material_id,
            kind: TransactionKind::from_code(&m.kind).unwrap_or(TransactionKind::Adjustment),
            amount_grams: m.amount_grams,
            order_id: m.order_id,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

/// Newest first, optionally narrowed to a material and/or an order
pub async fn list(
    material_id: Option<Uuid>,
    order_id: Option<Uuid>,
) -> anyhow::Result<Vec<InventoryTransaction>> {
    let mut query = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .order_by_desc(Column::CreatedAt);
    if let Some(material_id) = material_id {
        query = query.filter(Column::MaterialId.eq(material_id.to_string()));
    }
    if let Some(order_id) = order_id {
        query = query.filter(Column::OrderId.eq(order_id.to_string()));
    }
    let items: Vec<InventoryTransaction> = query
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn insert(aggregate: &InventoryTransaction) -> anyhow::Result<Uuid> {
    let uuid = aggregate.base.id.value();
    let active = ActiveModel {
        id: Set(uuid.to_string()),
        code: Set(aggregate.base.code.clone()),
        description: Set(aggregate.base.description.clone()),
        comment: Set(aggregate.base.comment.clone()),
        material_id: Set(aggregate.material_id.clone()),
        kind: Set(aggregate.kind.code().to_string()),
        amount_grams: Set(aggregate.amount_grams),
        order_id: Set(aggregate.order_id.clone()),
        is_deleted: Set(aggregate.base.metadata.is_deleted),
        is_posted: Set(aggregate.base.metadata.is_posted),
        created_at: Set(Some(aggregate.base.metadata.created_at)),
        updated_at: Set(Some(aggregate.base.metadata.updated_at)),
        version: Set(aggregate.base.metadata.version),
    };
    active.insert(conn()).await?;
    Ok(uuid)
}
