use chrono::Utc;
use contracts::domain::a002_printer::aggregate::{Printer, PrinterId};
use contracts::domain::common::{BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a002_printer")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub code: String,
    pub description: String,
    pub comment: Option<String>,
    pub model: Option<String>,
    pub hourly_rate: f64,
    pub power_consumption_watts: f64,
    pub electricity_cost_per_kwh: f64,
    pub total_print_hours: f64,
    pub total_print_count: i64,
    pub last_maintenance_at: Option<chrono::DateTime<chrono::Utc>>,
    pub hours_at_last_maintenance: f64,
    pub maintenance_interval_hours: f64,
    pub is_active: bool,
    pub current_job_order_id: Option<String>,
    pub is_deleted: bool,
    pub is_posted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Printer {
    fn from(m: Model) -> Self {
        let metadata = EntityMetadata {
            created_at: m.created_at.unwrap_or_else(Utc::now),
            updated_at: m.updated_at.unwrap_or_else(Utc::now),
            is_deleted: m.is_deleted,
            is_posted: m.is_posted,
            version: m.version,
        };
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());

        Printer {
            base: BaseAggregate::with_metadata(
                PrinterId(uuid),
                m.code,
                m.description,
                m.comment.clone(),
                metadata,
            ),
            model: m.model,
            hourly_rate: m.hourly_rate,
            power_consumption_watts: m.power_consumption_watts,
            electricity_cost_per_kwh: m.electricity_cost_per_kwh,
            total_print_hours: m.total_print_hours,
            total_print_count: m.total_print_count,
            last_maintenance_at: m.last_maintenance_at,
            hours_at_last_maintenance: m.hours_at_last_maintenance,
            maintenance_interval_hours: m.maintenance_interval_hours,
            is_active: m.is_active,
            current_job_order_id: m.current_job_order_id,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

fn to_active(aggregate: &Printer) -> ActiveModel {
    ActiveModel {
        id: Set(aggregate.base.id.value().to_string()),
        code: Set(aggregate.base.code.clone()),
        description: Set(aggregate.base.description.clone()),
        comment: Set(aggregate.base.comment.clone()),
        model: Set(aggregate.model.clone()),
        hourly_rate: Set(aggregate.hourly_rate),
        power_consumption_watts: Set(aggregate.power_consumption_watts),
        electricity_cost_per_kwh: Set(aggregate.electricity_cost_per_kwh),
        total_print_hours: Set(aggregate.total_print_hours),
        total_print_count: Set(aggregate.total_print_count),
        last_maintenance_at: Set(aggregate.last_maintenance_at),
        hours_at_last_maintenance: Set(aggregate.hours_at_last_maintenance),
        maintenance_interval_hours: Set(aggregate.maintenance_interval_hours),
        is_active: Set(aggregate.is_active),
        current_job_order_id: Set(aggregate.current_job_order_id.clone()),
        is_deleted: Set(aggregate.base.metadata.is_deleted),
        is_posted: Set(aggregate.base.metadata.is_posted),
        created_at: Set(Some(aggregate.base.metadata.created_at)),
        updated_at: Set(Some(aggregate.base.metadata.updated_at)),
        version: Set(aggregate.base.metadata.version),
    }
}

pub async fn list_all() -> anyhow::Result<Vec<Printer>> {
    let items: Vec<Printer> = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .order_by_desc(Column::CreatedAt)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

/// First active printer; its hourly rate prices the catalog
pub async fn first_active() -> anyhow::Result<Option<Printer>> {
    let result = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .filter(Column::IsActive.eq(true))
        .order_by_asc(Column::CreatedAt)
        .one(conn())
        .await?;
    Ok(result.map(Into::into))
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Printer>> {
    let result = Entity::find_by_id(id.to_string()).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn insert(aggregate: &Printer) -> anyhow::Result<Uuid> {
    let uuid = aggregate.base.id.value();
    to_active(aggregate).insert(conn()).await?;
    Ok(uuid)
}

pub async fn update(aggregate: &Printer) -> anyhow::Result<()> {
    let mut active = to_active(aggregate);
    active.created_at = sea_orm::ActiveValue::NotSet;
    active.update(conn()).await?;
    Ok(())
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
