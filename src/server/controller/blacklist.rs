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
        blacklist::{AddBlacklistDto, BlacklistEntryDto},
    },
    server::{
        controller::as_gateway,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::blacklist::BlacklistService,
        state::AppState,
        util::parse::parse_snowflake,
    },
};

pub static BLACKLIST_TAG: &str = "blacklist";

#[utoipa::path(
    get,
    path = "/api/blacklist",
    tag = BLACKLIST_TAG,
    responses(
        (status = 200, description = "Effective blacklist", body = Vec<BlacklistEntryDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a dashboard operator", body = ErrorDto)
    ),
)]
pub async fn get_blacklist(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.operator_ids, &session)
        .require(&[Permission::Operator])
        .await?;

    let gateway = state.bot.gateway().await;
    let entries = BlacklistService::new(&state.store)
        .get_resolved(as_gateway(&gateway))
        .await;

    Ok((StatusCode::OK, Json(entries)))
}

#[utoipa::path(
    post,
    path = "/api/blacklist",
    tag = BLACKLIST_TAG,
    request_body = AddBlacklistDto,
    responses(
        (status = 200, description = "Blacklist after the addition", body = Vec<BlacklistEntryDto>),
        (status = 400, description = "Not a Discord user ID", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a dashboard operator", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_to_blacklist(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<AddBlacklistDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.operator_ids, &session)
        .require(&[Permission::Operator])
        .await?;

    let gateway = state.bot.gateway().await;
    let entries = BlacklistService::new(&state.store)
        .add(&payload.user_id, as_gateway(&gateway))
        .await?;

    Ok((StatusCode::OK, Json(entries)))
}

#[utoipa::path(
    delete,
    path = "/api/blacklist/{user_id}",
    tag = BLACKLIST_TAG,
    params(
        ("user_id" = String, Path, description = "Discord user ID")
    ),
    responses(
        (status = 200, description = "Blacklist after the removal", body = Vec<BlacklistEntryDto>),
        (status = 400, description = "Not a Discord user ID", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a dashboard operator", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_from_blacklist(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.operator_ids, &session)
        .require(&[Permission::Operator])
        .await?;

    let user_id = parse_snowflake(&user_id)?;

    let gateway = state.bot.gateway().await;
    let entries = BlacklistService::new(&state.store)
        .remove(user_id, as_gateway(&gateway))
        .await?;

    Ok((StatusCode::OK, Json(entries)))
}
