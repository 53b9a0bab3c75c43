use super::repository;
use crate::shared::error::ServiceError;
use contracts::domain::a007_user_settings::UserSettings;

/// Current settings; defaults when nothing has been saved yet
pub async fn get() -> anyhow::Result<UserSettings> {
    Ok(repository::get().await?.unwrap_or_default())
}

pub async fn save(settings: UserSettings) -> anyhow::Result<()> {
    settings
        .validate()
        .map_err(ServiceError::Validation)?;
    repository::save(&settings).await
}
