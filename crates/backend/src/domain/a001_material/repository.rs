use chrono::Utc;
use contracts::domain::a001_material::aggregate::{Material, MaterialId};
use contracts::domain::common::{BaseAggregate, EntityMetadata};
use contracts::enums::MaterialType;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a001_material")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub code: String,
    pub description: String,
    pub comment: Option<String>,
    pub material_type: String,
    pub color: Option<String>,
    pub brand: Option<String>,
    pub cost_per_gram: f64,
    pub current_stock_grams: f64,
    pub low_stock_threshold: f64,
    pub print_temp_min: Option<f64>,
    pub print_temp_max: Option<f64>,
    pub bed_temp_min: Option<f64>,
    pub bed_temp_max: Option<f64>,
    pub is_deleted: bool,
    pub is_posted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Material {
    fn from(m: Model) -> Self {
        let metadata = EntityMetadata {
            created_at: m.created_at.unwrap_or_else(Utc::now),
            updated_at: m.updated_at.unwrap_or_else(Utc::now),
            is_deleted: m.is_deleted,
            is_posted: m.is_posted,
            version: m.version,
        };
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());

        Material {
            base: BaseAggregate::with_metadata(
                MaterialId(uuid),
                m.code,
                m.description,
                m.comment.clone(),
                metadata,
            ),
            material_type: MaterialType::from_code(&m.material_type)
                .unwrap_or(MaterialType::Other),
            color: m.color,
            brand: m.brand,
            cost_per_gram: m.cost_per_gram,
            current_stock_grams: m.current_stock_grams,
            low_stock_threshold: m.low_stock_threshold,
            print_temp_min: m.print_temp_min,
            print_temp_max: m.print_temp_max,
            bed_temp_min: m.bed_temp_min,
            bed_temp_max: m.bed_temp_max,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

fn to_active(aggregate: &Material) -> ActiveModel {
    ActiveModel {
        id: Set(aggregate.base.id.value().to_string()),
        code: Set(aggregate.base.code.clone()),
        description: Set(aggregate.base.description.clone()),
        comment: Set(aggregate.base.comment.clone()),
        material_type: Set(aggregate.material_type.code().to_string()),
        color: Set(aggregate.color.clone()),
        brand: Set(aggregate.brand.clone()),
        cost_per_gram: Set(aggregate.cost_per_gram),
        current_stock_grams: Set(aggregate.current_stock_grams),
        low_stock_threshold: Set(aggregate.low_stock_threshold),
        print_temp_min: Set(aggregate.print_temp_min),
        print_temp_max: Set(aggregate.print_temp_max),
        bed_temp_min: Set(aggregate.bed_temp_min),
        bed_temp_max: Set(aggregate.bed_temp_max),
        is_deleted: Set(aggregate.base.metadata.is_deleted),
        is_posted: Set(aggregate.base.metadata.is_posted),
        created_at: Set(Some(aggregate.base.metadata.created_at)),
        updated_at: Set(Some(aggregate.base.metadata.updated_at)),
        version: Set(aggregate.base.metadata.version),
    }
}

pub async fn list_all() -> anyhow::Result<Vec<Material>> {
    let items: Vec<Material> = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .order_by_desc(Column::CreatedAt)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

/// Materials at or below their reorder threshold
pub async fn list_low_stock() -> anyhow::Result<Vec<Material>> {
    use sea_orm::sea_query::Expr;
    let items: Vec<Material> = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .filter(Expr::col(Column::CurrentStockGrams).lte(Expr::col(Column::LowStockThreshold)))
        .order_by_asc(Column::Description)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Material>> {
    let result = Entity::find_by_id(id.to_string()).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn insert(aggregate: &Material) -> anyhow::Result<Uuid> {
    let uuid = aggregate.base.id.value();
    to_active(aggregate).insert(conn()).await?;
    Ok(uuid)
}

pub async fn update(aggregate: &Material) -> anyhow::Result<()> {
    let mut active = to_active(aggregate);
    active.created_at = sea_orm::ActiveValue::NotSet;
    active.update(conn()).await?;
    Ok(())
}

/// Adjust the stock level in place (used by inventory transactions)
pub async fn set_stock(id: Uuid, stock_grams: f64) -> anyhow::Result<bool> {
    use sea_orm::sea_query::Expr;
    let result = Entity::update_many()
        .col_expr(Column::CurrentStockGrams, Expr::value(stock_grams))
        .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
        .filter(Column::Id.eq(id.to_string()))
        .exec(conn())
        .await?;
    Ok(result.rows_affected > 0)
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
