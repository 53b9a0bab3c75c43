use chrono::{DateTime, Utc};
use contracts::domain::a007_user_settings::{Language, UserSettings};
use contracts::shared::currency::Currency;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelTrait, EntityTrait, Set};

use crate::shared::data::db::get_connection;

/// Fixed key of the singleton settings row
fn singleton_id() -> String {
    Uuid::nil().to_string()
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a007_user_settings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub language: String,
    pub currency: String,
    pub theme: String,
    pub default_markup_percent: f64,
    pub tax_rate: Option<f64>,
    pub telegram_chat_id: Option<String>,
    pub telegram_notifications_enabled: bool,
    pub notify_on_new_order: bool,
    pub notify_on_status_change: bool,
    pub notify_on_low_stock: bool,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for UserSettings {
    fn from(m: Model) -> Self {
        let defaults = UserSettings::default();
        UserSettings {
            language: Language::from_code(&m.language).unwrap_or(defaults.language),
            currency: Currency::from_code(&m.currency).unwrap_or(defaults.currency),
            theme: m.theme,
            default_markup_percent: m.default_markup_percent,
            tax_rate: m.tax_rate,
            telegram_chat_id: m.telegram_chat_id,
            telegram_notifications_enabled: m.telegram_notifications_enabled,
            notify_on_new_order: m.notify_on_new_order,
            notify_on_status_change: m.notify_on_status_change,
            notify_on_low_stock: m.notify_on_low_stock,
            updated_at: m.updated_at,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

/// Stored settings, or `None` when nothing has been saved yet
pub async fn get() -> anyhow::Result<Option<UserSettings>> {
    let result = Entity::find_by_id(singleton_id()).one(conn()).await?;
    Ok(result.map(Into::into))
}

/// Upsert the singleton row
pub async fn save(settings: &UserSettings) -> anyhow::Result<()> {
    let exists = Entity::find_by_id(singleton_id()).one(conn()).await?;

    let active = ActiveModel {
        id: Set(singleton_id()),
        language: Set(settings.language.code().to_string()),
        currency: Set(settings.currency.code().to_string()),
        theme: Set(settings.theme.clone()),
        default_markup_percent: Set(settings.default_markup_percent),
        tax_rate: Set(settings.tax_rate),
        telegram_chat_id: Set(settings.telegram_chat_id.clone()),
        telegram_notifications_enabled: Set(settings.telegram_notifications_enabled),
        notify_on_new_order: Set(settings.notify_on_new_order),
        notify_on_status_change: Set(settings.notify_on_status_change),
        notify_on_low_stock: Set(settings.notify_on_low_stock),
        updated_at: Set(Some(Utc::now())),
    };

    if exists.is_some() {
        active.update(conn()).await?;
    } else {
        active.insert(conn()).await?;
    }
    Ok(())
}
