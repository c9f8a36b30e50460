use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No authenticated user is stored in the session.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("User not found in session")]
    UserNotInSession,

    /// Discord rejected the access token stored in the session.
    ///
    /// The token expired or was revoked; the user has to log in again.
    /// Results in a 401 Unauthorized response.
    #[error("Discord rejected the session access token")]
    TokenRejected,

    /// User is logged in but not on the operator allow-list.
    ///
    /// Results in a 403 Forbidden response.
    #[error("User {0} denied access: {1}")]
    AccessDenied(u64, String),

    /// CSRF state validation failed during OAuth callback.
    ///
    /// The CSRF state token in the OAuth callback URL does not match the token stored
    /// in the session, indicating a potential CSRF attack or an invalid callback request.
    /// Results in a 400 Bad Request response.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// The OAuth callback arrived without a CSRF token stored in the session.
    ///
    /// Results in a 400 Bad Request response.
    #[error("Failed to login user due to missing CSRF state in session")]
    CsrfMissingValue,

    /// Exchanging the authorization code for an access token failed.
    ///
    /// Results in a 500 Internal Server Error with a generic message.
    #[error("Failed to exchange authorization code: {0}")]
    RequestTokenErr(String),
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to appropriate HTTP status codes and user-friendly error messages:
/// - `UserNotInSession` / `TokenRejected` → 401 Unauthorized
/// - `AccessDenied` → 403 Forbidden
/// - `CsrfValidationFailed` / `CsrfMissingValue` → 400 Bad Request
/// - `RequestTokenErr` → 500 Internal Server Error with generic message
///
/// All errors are logged at debug level for diagnostics while keeping client-facing messages
/// generic to avoid information leakage.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::UserNotInSession | Self::TokenRejected => {
                (StatusCode::UNAUTHORIZED, "Not logged in")
            }
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                "You do not have access to this dashboard",
            ),
            Self::CsrfValidationFailed | Self::CsrfMissingValue => (
                StatusCode::BAD_REQUEST,
                "There was an issue logging you in, please try again.",
            ),
            Self::RequestTokenErr(_) => {
                tracing::error!("{}", self);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
