use chrono::{DateTime, Utc};
use contracts::domain::a008_exchange_rates::ExchangeRates;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelTrait, EntityTrait, Set};

use crate::shared::data::db::get_connection;

/// Fixed key of the singleton rates row
fn singleton_id() -> String {
    Uuid::nil().to_string()
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a008_exchange_rates")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub usd: f64,
    pub eur: f64,
    pub cny: f64,
    pub fetched_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for ExchangeRates {
    fn from(m: Model) -> Self {
        ExchangeRates {
            usd: m.usd,
            eur: m.eur,
            cny: m.cny,
            fetched_at: m.fetched_at,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

/// Stored rates, or `None` when no refresh has succeeded yet
pub async fn get() -> anyhow::Result<Option<ExchangeRates>> {
    let result = Entity::find_by_id(singleton_id()).one(conn()).await?;
    Ok(result.map(Into::into))
}

/// Upsert the singleton row
pub async fn save(rates: &ExchangeRates) -> anyhow::Result<()> {
    let exists = Entity::find_by_id(singleton_id()).one(conn()).await?;

    let active = ActiveModel {
        id: Set(singleton_id()),
        usd: Set(rates.usd),
        eur: Set(rates.eur),
        cny: Set(rates.cny),
        fetched_at: Set(rates.fetched_at),
    };

    if exists.is_some() {
        active.update(conn()).await?;
    } else {
        active.insert(conn()).await?;
    }
    Ok(())
}
