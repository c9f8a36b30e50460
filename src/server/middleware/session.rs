//! Type-safe session management wrappers.
//!
//! Each struct wraps the same underlying `Session` but exposes only the methods
//! relevant to its concern:
//! - `AuthSession` - The logged-in user's Discord ID and OAuth access token
//! - `CsrfSession` - CSRF token management for the OAuth flow

use tower_sessions::Session;

use crate::server::{error::AppError, util::parse::parse_u64_from_string};

// Session key constants
const SESSION_AUTH_USER_ID: &str = "auth:user";
const SESSION_AUTH_ACCESS_TOKEN: &str = "auth:access_token";
const SESSION_AUTH_CSRF_TOKEN: &str = "auth:csrf_token";

/// Authentication session management.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the logged-in user after a successful OAuth callback.
    ///
    /// The session ID is cycled first so a pre-login session cannot be fixated.
    ///
    /// # Arguments
    /// - `user_id` - The user's Discord ID
    /// - `access_token` - OAuth access token used to read the user's guilds
    ///
    /// # Returns
    /// - `Ok(())` - Login stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn login(&self, user_id: u64, access_token: String) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        self.session
            .insert(SESSION_AUTH_USER_ID, user_id.to_string())
            .await?;
        self.session
            .insert(SESSION_AUTH_ACCESS_TOKEN, access_token)
            .await?;
        Ok(())
    }

    /// Retrieves the user's Discord ID from the session.
    ///
    /// # Returns
    /// - `Ok(Some(user_id))` - User is logged in
    /// - `Ok(None)` - No user in session (not logged in)
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_user_id(&self) -> Result<Option<u64>, AppError> {
        let Some(user_id_str) = self.session.get::<String>(SESSION_AUTH_USER_ID).await? else {
            return Ok(None);
        };

        let user_id = parse_u64_from_string(user_id_str)?;

        Ok(Some(user_id))
    }

    pub async fn get_access_token(&self) -> Result<Option<String>, AppError> {
        Ok(self.session.get::<String>(SESSION_AUTH_ACCESS_TOKEN).await?)
    }

    /// Clears all data from the session.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}

/// CSRF protection session management.
///
/// Tokens are stored during login initiation and validated during the OAuth callback.
pub struct CsrfSession<'a> {
    session: &'a Session,
}

impl<'a> CsrfSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    pub async fn set_token(&self, token: String) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_CSRF_TOKEN, token).await?;
        Ok(())
    }

    /// Retrieves and removes the CSRF token from the session.
    ///
    /// The token is removed so each one can only be used once.
    pub async fn take_token(&self) -> Result<Option<String>, AppError> {
        let token = self.session.remove(SESSION_AUTH_CSRF_TOKEN).await?;
        Ok(token)
    }
}
