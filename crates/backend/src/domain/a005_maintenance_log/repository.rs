use chrono::{DateTime, Utc};
use contracts::domain::a005_maintenance_log::aggregate::{MaintenanceLog, MaintenanceLogId};
use contracts::domain::common::{BaseAggregate, EntityMetadata};
use contracts::enums::MaintenanceType;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a005_maintenance_log")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub code: String,
    pub description: String,
    pub comment: Option<String>,
    pub printer_id: String,
    pub maintenance_type: String,
    pub hours_at_maintenance: f64,
    pub cost: Option<f64>,
    pub performed_at: Option<DateTime<Utc>>,
    pub next_due_at: Option<DateTime<Utc>>,
    pub is_deleted: bool,
    pub is_posted: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for MaintenanceLog {
    fn from(m: Model) -> Self {
        let metadata = EntityMetadata {
            created_at: m.created_at.unwrap_or_else(Utc::now),
            updated_at: m.updated_at.unwrap_or_else(Utc::now),
            is_deleted: m.is_deleted,
            is_posted: m.is_posted,
            version: m.version,
        };
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());

        MaintenanceLog {
            base: BaseAggregate::with_metadata(
                MaintenanceLogId(uuid),
                m.code,
                m.description,
                m.comment.clone(),
                metadata,
            ),
            printer_id: m.printer_id,
            maintenance_type: MaintenanceType::from_code(&m.maintenance_type)
                .unwrap_or(MaintenanceType::Other),
            hours_at_maintenance: m.hours_at_maintenance,
            cost: m.cost,
            performed_at: m.performed_at.unwrap_or_else(Utc::now),
            next_due_at: m.next_due_at,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

fn to_active(aggregate: &MaintenanceLog) -> ActiveModel {
    ActiveModel {
        id: Set(aggregate.base.id.value().to_string()),
        code: Set(aggregate.base.code.clone()),
        description: Set(aggregate.base.description.clone()),
        comment: Set(aggregate.base.comment.clone()),
        printer_id: Set(aggregate.printer_id.clone()),
        maintenance_type: Set(aggregate.maintenance_type.code().to_string()),
        hours_at_maintenance: Set(aggregate.hours_at_maintenance),
        cost: Set(aggregate.cost),
        performed_at: Set(Some(aggregate.performed_at)),
        next_due_at: Set(aggregate.next_due_at),
        is_deleted: Set(aggregate.base.metadata.is_deleted),
        is_posted: Set(aggregate.base.metadata.is_posted),
        created_at: Set(Some(aggregate.base.metadata.created_at)),
        updated_at: Set(Some(aggregate.base.metadata.updated_at)),
        version: Set(aggregate.base.metadata.version),
    }
}

/// Newest first, optionally narrowed to one printer
pub async fn list(printer_id: Option<Uuid>) -> anyhow::Result<Vec<MaintenanceLog>> {
    let mut query = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .order_by_desc(Column::PerformedAt);
    if let Some(printer_id) = printer_id {
        query = query.filter(Column::PrinterId.eq(printer_id.to_string()));
    }
    let items: Vec<MaintenanceLog> = query
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<MaintenanceLog>> {
    let result = Entity::find_by_id(id.to_string()).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn insert(aggregate: &MaintenanceLog) -> anyhow::Result<Uuid> {
    let uuid = aggregate.base.id.value();
    to_active(aggregate).insert(conn()).await?;
    Ok(uuid)
}

pub async fn soft_delete(id: Uuid) -> anyhow::Result<bool> {
    use sea_orm::sea_query::Expr;
    let result = Entity::update_many()
        .col_expr(Column::IsDeleted, Expr::value(true))
        .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
        .filter(Column::Id.eq(id.to_string()))
        .exec(conn())
        .await?;
    Ok(result.rows_affected > 0)
}
