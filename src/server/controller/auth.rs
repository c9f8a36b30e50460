use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::api::{ErrorDto, SuccessDto},
    server::{
        error::{auth::AuthError, AppError},
        middleware::session::{AuthSession, CsrfSession},
        service::auth::AuthService,
        state::AppState,
        util::parse::parse_u64_from_string,
    },
};

pub static AUTH_TAG: &str = "auth";

/// Query parameters for the OAuth callback endpoint.
#[derive(Deserialize)]
pub struct CallbackParams {
    /// CSRF state token to be validated against the session value.
    pub state: String,
    /// Authorization code from Discord for token exchange.
    pub code: String,
}

#[utoipa::path(
    get,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Redirect to the Discord consent screen"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(
        &state.http_client,
        &state.oauth_client,
        &state.discord_api_url,
    );

    let (url, csrf_token) = auth_service.login_url();

    CsrfSession::new(&session)
        .set_token(csrf_token.secret().to_string())
        .await?;

    Ok(Redirect::temporary(url.as_str()))
}

/// Completes the OAuth flow and sends the user back to the dashboard.
#[utoipa::path(
    get,
    path = "/api/auth/callback",
    tag = AUTH_TAG,
    params(
        ("code" = String, Query, description = "Authorization code"),
        ("state" = String, Query, description = "CSRF state token")
    ),
    responses(
        (status = 303, description = "Logged in, redirect to the dashboard"),
        (status = 400, description = "CSRF state missing or mismatched", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<CallbackParams>,
) -> Result<impl IntoResponse, AppError> {
    validate_csrf(&session, &params.state).await?;

    let auth_service = AuthService::new(
        &state.http_client,
        &state.oauth_client,
        &state.discord_api_url,
    );
    let (user, access_token) = auth_service.callback(params.code).await?;

    let user_id = parse_u64_from_string(user.id.clone())?;
    AuthSession::new(&session)
        .login(user_id, access_token)
        .await?;

    tracing::info!("{} ({}) logged in", user.username, user.id);

    Ok(Redirect::to(&state.app_url))
}

#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Session cleared", body = SuccessDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok((StatusCode::OK, Json(SuccessDto { success: true })))
}

async fn validate_csrf(session: &Session, csrf_state: &str) -> Result<(), AppError> {
    let Some(stored) = CsrfSession::new(session).take_token().await? else {
        return Err(AuthError::CsrfMissingValue.into());
    };

    if stored != csrf_state {
        return Err(AuthError::CsrfValidationFailed.into());
    }

    Ok(())
}
