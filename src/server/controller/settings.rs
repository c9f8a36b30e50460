use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::Value;
use tower_sessions::Session;

use crate::{
    model::api::ErrorDto,
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::settings::UserSettings,
        service::settings::SettingsService,
        state::AppState,
    },
};

pub static SETTINGS_TAG: &str = "settings";

#[utoipa::path(
    get,
    path = "/api/settings",
    tag = SETTINGS_TAG,
    responses(
        (status = 200, description = "Settings of the logged-in user", body = UserSettings),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a dashboard operator", body = ErrorDto)
    ),
)]
pub async fn get_settings(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.operator_ids, &session)
        .require(&[Permission::Operator])
        .await?;

    let settings = SettingsService::new(&state.store).get(user.user_id).await;

    Ok((StatusCode::OK, Json(settings)))
}

/// Merges the posted fields onto the user's settings.
///
/// Bot account fields in the body are ignored.
#[utoipa::path(
    post,
    path = "/api/settings",
    tag = SETTINGS_TAG,
    request_body = UserSettings,
    responses(
        (status = 200, description = "Saved settings", body = UserSettings),
        (status = 400, description = "Body is not a valid settings object", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a dashboard operator", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_settings(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.operator_ids, &session)
        .require(&[Permission::Operator])
        .await?;

    let settings = SettingsService::new(&state.store)
        .update(user.user_id, payload)
        .await?;

    Ok((StatusCode::OK, Json(settings)))
}
