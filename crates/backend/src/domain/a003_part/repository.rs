use chrono::Utc;
use contracts::domain::a003_part::aggregate::{Part, PartId};
use contracts::domain::common::{BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a003_part")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub code: String,
    pub description: String,
    pub comment: Option<String>,
    pub material_id: String,
    pub weight_grams: f64,
    pub print_time_minutes: f64,
    pub material_cost: f64,
    pub print_cost: f64,
    pub base_cost: f64,
    pub default_markup_percent: f64,
    pub suggested_price: f64,
    pub category: Option<String>,
    /// JSON-encoded list of tag strings
    pub tags: String,
    pub is_deleted: bool,
    pub is_posted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Part {
    fn from(m: Model) -> Self {
        let metadata = EntityMetadata {
            created_at: m.created_at.unwrap_or_else(Utc::now),
            updated_at: m.updated_at.unwrap_or_else(Utc::now),
            is_deleted: m.is_deleted,
            is_posted: m.is_posted,
            version: m.version,
        };
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());

        Part {
            base: BaseAggregate::with_metadata(
                PartId(uuid),
                m.code,
                m.description,
                m.comment.clone(),
                metadata,
            ),
            material_id: m.material_id,
            weight_grams: m.weight_grams,
            print_time_minutes: m.print_time_minutes,
            material_cost: m.material_cost,
            print_cost: m.print_cost,
            base_cost: m.base_cost,
            default_markup_percent: m.default_markup_percent,
            suggested_price: m.suggested_price,
            category: m.category,
            tags: serde_json::from_str(&m.tags).unwrap_or_default(),
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

fn to_active(aggregate: &Part) -> ActiveModel {
    ActiveModel {
        id: Set(aggregate.base.id.value().to_string()),
        code: Set(aggregate.base.code.clone()),
        description: Set(aggregate.base.description.clone()),
        comment: Set(aggregate.base.comment.clone()),
        material_id: Set(aggregate.material_id.clone()),
        weight_grams: Set(aggregate.weight_grams),
        print_time_minutes: Set(aggregate.print_time_minutes),
        material_cost: Set(aggregate.material_cost),
        print_cost: Set(aggregate.print_cost),
        base_cost: Set(aggregate.base_cost),
        default_markup_percent: Set(aggregate.default_markup_percent),
        suggested_price: Set(aggregate.suggested_price),
        category: Set(aggregate.category.clone()),
        tags: Set(serde_json::to_string(&aggregate.tags).unwrap_or_else(|_| "[]".into())),
        is_deleted: Set(aggregate.base.metadata.is_deleted),
        is_posted: Set(aggregate.base.metadata.is_posted),
        created_at: Set(Some(aggregate.base.metadata.created_at)),
        updated_at: Set(Some(aggregate.base.metadata.updated_at)),
        version: Set(aggregate.base.metadata.version),
    }
}

/// List parts, optionally narrowed to one material
pub async fn list(material_id: Option<Uuid>) -> anyhow::Result<Vec<Part>> {
    let mut query = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .order_by_desc(Column::CreatedAt);
    if let Some(material_id) = material_id {
        query = query.filter(Column::MaterialId.eq(material_id.to_string()));
    }
    let items: Vec<Part> = query
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Part>> {
    let result = Entity::find_by_id(id.to_string()).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn count_all() -> anyhow::Result<u64> {
    use sea_orm::PaginatorTrait;
    let count = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .count(conn())
        .await?;
    Ok(count)
}

pub async fn insert(aggregate: &Part) -> anyhow::Result<Uuid> {
    let uuid = aggregate.base.id.value();
    to_active(aggregate).insert(conn()).await?;
    Ok(uuid)
}

pub async fn update(aggregate: &Part) -> anyhow::Result<()> {
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
