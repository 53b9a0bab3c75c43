use chrono::{DateTime, Utc};
use contracts::domain::a004_order::aggregate::{Order, OrderId, OrderLine};
use contracts::domain::common::{BaseAggregate, EntityMetadata};
use contracts::enums::OrderStatus;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a004_order")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub code: String,
    pub description: String,
    pub comment: Option<String>,
    pub customer_name: String,
    pub customer_phone: Option<String>,
    pub customer_email: Option<String>,
    pub customer_telegram: Option<String>,
    pub status: String,
    /// JSON-encoded line items
    pub lines: String,
    pub subtotal: f64,
    pub markup: f64,
    pub total: f64,
    pub started_at: Option<DateTime<Utc>>,
    pub finished_at: Option<DateTime<Utc>>,
    pub delivered_at: Option<DateTime<Utc>>,
    pub estimated_completion: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    pub is_deleted: bool,
    pub is_posted: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Order {
    fn from(m: Model) -> Self {
        let metadata = EntityMetadata {
            created_at: m.created_at.unwrap_or_else(Utc::now),
            updated_at: m.updated_at.unwrap_or_else(Utc::now),
            is_deleted: m.is_deleted,
            is_posted: m.is_posted,
            version: m.version,
        };
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());
        let lines: Vec<OrderLine> = serde_json::from_str(&m.lines).unwrap_or_default();

        Order {
            base: BaseAggregate::with_metadata(
                OrderId(uuid),
                m.code,
                m.description,
                m.comment.clone(),
                metadata,
            ),
            customer_name: m.customer_name,
            customer_phone: m.customer_phone,
            customer_email: m.customer_email,
            customer_telegram: m.customer_telegram,
            status: OrderStatus::from_code(&m.status).unwrap_or(OrderStatus::New),
            lines,
            subtotal: m.subtotal,
            markup: m.markup,
            total: m.total,
            started_at: m.started_at,
            finished_at: m.finished_at,
            delivered_at: m.delivered_at,
            estimated_completion: m.estimated_completion,
            notes: m.notes,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

fn to_active(aggregate: &Order) -> ActiveModel {
    ActiveModel {
        id: Set(aggregate.base.id.value().to_string()),
        code: Set(aggregate.base.code.clone()),
        description: Set(aggregate.base.description.clone()),
        comment: Set(aggregate.base.comment.clone()),
        customer_name: Set(aggregate.customer_name.clone()),
        customer_phone: Set(aggregate.customer_phone.clone()),
        customer_email: Set(aggregate.customer_email.clone()),
        customer_telegram: Set(aggregate.customer_telegram.clone()),
        status: Set(aggregate.status.code().to_string()),
        lines: Set(serde_json::to_string(&aggregate.lines).unwrap_or_else(|_| "[]".into())),
        subtotal: Set(aggregate.subtotal),
        markup: Set(aggregate.markup),
        total: Set(aggregate.total),
        started_at: Set(aggregate.started_at),
        finished_at: Set(aggregate.finished_at),
        delivered_at: Set(aggregate.delivered_at),
        estimated_completion: Set(aggregate.estimated_completion),
        notes: Set(aggregate.notes.clone()),
        is_deleted: Set(aggregate.base.metadata.is_deleted),
        is_posted: Set(aggregate.base.metadata.is_posted),
        created_at: Set(Some(aggregate.base.metadata.created_at)),
        updated_at: Set(Some(aggregate.base.metadata.updated_at)),
        version: Set(aggregate.base.metadata.version),
    }
}

/// Newest first, optional status filter and limit
pub async fn list(
    status: Option<OrderStatus>,
    limit: Option<u64>,
) -> anyhow::Result<Vec<Order>> {
    let mut query = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .order_by_desc(Column::CreatedAt);
    if let Some(status) = status {
        query = query.filter(Column::Status.eq(status.code()));
    }
    if let Some(limit) = limit {
        query = query.limit(limit);
    }
    let items: Vec<Order> = query
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

/// Orders created on or after the given instant (soft-deleted included:
/// a deleted order keeps its slot in the day's numbering)
pub async fn count_created_since(since: DateTime<Utc>) -> anyhow::Result<u64> {
    use sea_orm::PaginatorTrait;
    let count = Entity::find()
        .filter(Column::CreatedAt.gte(since))
        .count(conn())
        .await?;
    Ok(count)
}

/// Orders created in `[from, to)`, for reports and the dashboard
pub async fn list_created_between(
    from: DateTime<Utc>,
    to: DateTime<Utc>,
) -> anyhow::Result<Vec<Order>> {
    let items: Vec<Order> = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .filter(Column::CreatedAt.gte(from))
        .filter(Column::CreatedAt.lt(to))
        .order_by_desc(Column::CreatedAt)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

/// All-time order counts per status
pub async fn count_by_status() -> anyhow::Result<Vec<(OrderStatus, u64)>> {
    use sea_orm::PaginatorTrait;
    let mut counts = Vec::new();
    for status in OrderStatus::all() {
        let count = Entity::find()
            .filter(Column::IsDeleted.eq(false))
            .filter(Column::Status.eq(status.code()))
            .count(conn())
            .await?;
        counts.push((status, count));
    }
    Ok(counts)
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Order>> {
    let result = Entity::find_by_id(id.to_string()).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn insert(aggregate: &Order) -> anyhow::Result<Uuid> {
    let uuid = aggregate.base.id.value();
    to_active(aggregate).insert(conn()).await?;
    Ok(uuid)
}

pub async fn update(aggregate: &Order) -> anyhow::Result<()> {
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
