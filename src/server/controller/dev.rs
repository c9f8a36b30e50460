use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        bot::{AddBotAccountDto, BotAccountDto, SwitchBotDto},
        dev::UpdateDevScopeDto,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::settings::DevScopeSettings,
        service::dev::DevService,
        state::AppState,
    },
};

pub static DEV_TAG: &str = "dev";

#[utoipa::path(
    get,
    path = "/api/dev/bots",
    tag = DEV_TAG,
    responses(
        (status = 200, description = "Registered bot accounts without credentials", body = Vec<BotAccountDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a dashboard operator", body = ErrorDto)
    ),
)]
pub async fn list_bots(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.operator_ids, &session)
        .require(&[Permission::Operator])
        .await?;

    let bots = DevService::new(&state.store, &state.bot).list_bots().await;

    Ok((StatusCode::OK, Json(bots)))
}

/// Registers a bot account after checking its token with Discord.
#[utoipa::path(
    post,
    path = "/api/dev/bots",
    tag = DEV_TAG,
    request_body = AddBotAccountDto,
    responses(
        (status = 200, description = "Account list after registration", body = Vec<BotAccountDto>),
        (status = 400, description = "Missing or rejected token", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a dashboard operator", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register_bot(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<AddBotAccountDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.operator_ids, &session)
        .require(&[Permission::Operator])
        .await?;

    let bots = DevService::new(&state.store, &state.bot)
        .register_bot(payload)
        .await?;

    Ok((StatusCode::OK, Json(bots)))
}

#[utoipa::path(
    delete,
    path = "/api/dev/bots/{client_id}",
    tag = DEV_TAG,
    params(
        ("client_id" = String, Path, description = "Client ID of the bot account")
    ),
    responses(
        (status = 200, description = "Account list after removal", body = Vec<BotAccountDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a dashboard operator", body = ErrorDto),
        (status = 404, description = "No such bot account", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_bot(
    State(state): State<AppState>,
    session: Session,
    Path(client_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.operator_ids, &session)
        .require(&[Permission::Operator])
        .await?;

    let bots = DevService::new(&state.store, &state.bot)
        .remove_bot(&client_id)
        .await?;

    Ok((StatusCode::OK, Json(bots)))
}

/// Makes another account active and restarts the session with its token.
#[utoipa::path(
    post,
    path = "/api/dev/bots/switch",
    tag = DEV_TAG,
    request_body = SwitchBotDto,
    responses(
        (status = 200, description = "Whether the new session came up", body = SuccessDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a dashboard operator", body = ErrorDto),
        (status = 404, description = "No such bot account", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn switch_bot(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SwitchBotDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.operator_ids, &session)
        .require(&[Permission::Operator])
        .await?;

    let success = DevService::new(&state.store, &state.bot)
        .switch_bot(&payload.client_id)
        .await?;

    Ok((StatusCode::OK, Json(SuccessDto { success })))
}

#[utoipa::path(
    get,
    path = "/api/dev/settings",
    tag = DEV_TAG,
    responses(
        (status = 200, description = "Current scope toggles", body = DevScopeSettings),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a dashboard operator", body = ErrorDto)
    ),
)]
pub async fn get_dev_settings(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.operator_ids, &session)
        .require(&[Permission::Operator])
        .await?;

    let scope = DevService::new(&state.store, &state.bot).get_scope().await;

    Ok((StatusCode::OK, Json(scope)))
}

#[utoipa::path(
    post,
    path = "/api/dev/settings",
    tag = DEV_TAG,
    request_body = UpdateDevScopeDto,
    responses(
        (status = 200, description = "Scope toggles after the update", body = DevScopeSettings),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a dashboard operator", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_dev_settings(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpdateDevScopeDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.operator_ids, &session)
        .require(&[Permission::Operator])
        .await?;

    let scope = DevService::new(&state.store, &state.bot)
        .update_scope(payload)
        .await?;

    Ok((StatusCode::OK, Json(scope)))
}
