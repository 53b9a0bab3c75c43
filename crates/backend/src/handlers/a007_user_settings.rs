use axum::Json;

use crate::domain::a007_user_settings;
use crate::shared::error::ServiceError;
use contracts::domain::a007_user_settings::UserSettings;

/// GET /api/settings
pub async fn get() -> Result<Json<UserSettings>, ServiceError> {
    let settings = a007_user_settings::service::get()
        .await
        .map_err(ServiceError::from)?;
    Ok(Json(settings))
}

/// POST /api/settings
pub async fn save(Json(settings): Json<UserSettings>) -> Result<Json<UserSettings>, ServiceError> {
    a007_user_settings::service::save(settings.clone())
        .await
        .map_err(ServiceError::from)?;
    Ok(Json(settings))
}
