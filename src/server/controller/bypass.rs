use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        bypass::{BypassListDto, BypassRequestDto},
    },
    server::{
        controller::as_gateway,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::bypass::BypassService,
        state::AppState,
        util::parse::parse_snowflake,
    },
};

pub static BYPASS_TAG: &str = "bypass";

#[utoipa::path(
    get,
    path = "/api/bypass/{guild_id}",
    tag = BYPASS_TAG,
    params(
        ("guild_id" = String, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Users exempt in the guild", body = BypassListDto),
        (status = 400, description = "Not a Discord guild ID", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a dashboard operator", body = ErrorDto)
    ),
)]
pub async fn get_bypasses(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.operator_ids, &session)
        .require(&[Permission::Operator])
        .await?;

    let guild_id = parse_snowflake(&guild_id)?;

    let user_ids = BypassService::new(&state.store, state.bot.incidents())
        .get_by_guild(guild_id)
        .await;

    Ok((
        StatusCode::OK,
        Json(BypassListDto {
            guild_id: guild_id.to_string(),
            user_ids,
        }),
    ))
}

/// Exempts a user in a guild from the dashboard.
///
/// Takes the same path as an owner approving the request in Discord, so the ban is
/// lifted and any open request for the pair is closed.
#[utoipa::path(
    post,
    path = "/api/bypass",
    tag = BYPASS_TAG,
    request_body = BypassRequestDto,
    responses(
        (status = 200, description = "Bypass list of the guild after the grant", body = BypassListDto),
        (status = 400, description = "Not a Discord ID", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a dashboard operator", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn grant_bypass(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<BypassRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.operator_ids, &session)
        .require(&[Permission::Operator])
        .await?;

    let guild_id = parse_snowflake(&payload.guild_id)?;
    let user_id = parse_snowflake(&payload.user_id)?;

    let gateway = state.bot.gateway().await;
    let user_ids = BypassService::new(&state.store, state.bot.incidents())
        .grant(as_gateway(&gateway), guild_id, user_id)
        .await?;

    tracing::info!(
        "Operator {} granted {} a bypass in guild {}",
        user.user_id,
        user_id,
        guild_id
    );

    Ok((
        StatusCode::OK,
        Json(BypassListDto {
            guild_id: guild_id.to_string(),
            user_ids,
        }),
    ))
}
