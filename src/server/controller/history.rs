use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::api::ErrorDto,
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{ban::BanRecord, suspicious_bot::SuspiciousBot},
        service::history::HistoryService,
        state::AppState,
    },
};

pub static HISTORY_TAG: &str = "history";

#[utoipa::path(
    get,
    path = "/api/recent-bans",
    tag = HISTORY_TAG,
    responses(
        (status = 200, description = "Ban history for the current scope, newest first", body = Vec<BanRecord>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a dashboard operator", body = ErrorDto)
    ),
)]
pub async fn get_recent_bans(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.operator_ids, &session)
        .require(&[Permission::Operator])
        .await?;

    let bans = HistoryService::new(&state.store).recent_bans().await;

    Ok((StatusCode::OK, Json(bans)))
}

#[utoipa::path(
    get,
    path = "/api/suspicious-bots",
    tag = HISTORY_TAG,
    responses(
        (status = 200, description = "Findings of the latest bot scan", body = Vec<SuspiciousBot>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a dashboard operator", body = ErrorDto)
    ),
)]
pub async fn get_suspicious_bots(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.operator_ids, &session)
        .require(&[Permission::Operator])
        .await?;

    let bots = HistoryService::new(&state.store).suspicious_bots().await;

    Ok((StatusCode::OK, Json(bots)))
}
