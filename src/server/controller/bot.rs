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
        bot::BotStatsDto,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        state::AppState,
        util::parse::parse_snowflake,
    },
};

pub static BOT_TAG: &str = "bot";

#[utoipa::path(
    get,
    path = "/api/bot/status",
    tag = BOT_TAG,
    responses(
        (status = 200, description = "Live session statistics", body = BotStatsDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a dashboard operator", body = ErrorDto)
    ),
)]
pub async fn get_status(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.operator_ids, &session)
        .require(&[Permission::Operator])
        .await?;

    Ok((StatusCode::OK, Json(state.bot.status().await)))
}

/// Starts the session with the active account's token.
///
/// Reports `success: false` when no credential is available or the session did not
/// become ready in time.
#[utoipa::path(
    post,
    path = "/api/bot/start",
    tag = BOT_TAG,
    responses(
        (status = 200, description = "Whether the session is running", body = SuccessDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a dashboard operator", body = ErrorDto)
    ),
)]
pub async fn start_bot(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.operator_ids, &session)
        .require(&[Permission::Operator])
        .await?;

    let success = state.bot.start().await;

    Ok((StatusCode::OK, Json(SuccessDto { success })))
}

#[utoipa::path(
    post,
    path = "/api/bot/stop",
    tag = BOT_TAG,
    responses(
        (status = 200, description = "Session stopped", body = SuccessDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a dashboard operator", body = ErrorDto)
    ),
)]
pub async fn stop_bot(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.operator_ids, &session)
        .require(&[Permission::Operator])
        .await?;

    let success = state.bot.stop().await;

    Ok((StatusCode::OK, Json(SuccessDto { success })))
}

#[utoipa::path(
    post,
    path = "/api/guilds/{guild_id}/leave",
    tag = BOT_TAG,
    params(
        ("guild_id" = String, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "The bot left the guild", body = SuccessDto),
        (status = 400, description = "Not a Discord guild ID", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a dashboard operator", body = ErrorDto),
        (status = 503, description = "No bot session is running", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn leave_guild(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.operator_ids, &session)
        .require(&[Permission::Operator])
        .await?;

    let guild_id = parse_snowflake(&guild_id)?;
    state.bot.leave_guild(guild_id).await?;

    tracing::info!("Operator {} made the bot leave guild {}", user.user_id, guild_id);

    Ok((StatusCode::OK, Json(SuccessDto { success: true })))
}
