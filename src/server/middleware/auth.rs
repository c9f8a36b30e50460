use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
};

pub enum Permission {
    /// On the dashboard operator allow-list. An empty allow-list admits every user.
    Operator,
}

/// The logged-in user a request runs as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: u64,
    pub access_token: String,
}

pub struct AuthGuard<'a> {
    operator_ids: &'a [u64],
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(operator_ids: &'a [u64], session: &'a Session) -> Self {
        Self {
            operator_ids,
            session,
        }
    }

    /// Requires a logged-in user holding every listed permission.
    ///
    /// # Returns
    /// - `Ok(AuthenticatedUser)` - The user and their OAuth access token
    /// - `Err(AuthError::UserNotInSession)` - Not logged in
    /// - `Err(AuthError::AccessDenied)` - A permission is missing
    pub async fn require(&self, permissions: &[Permission]) -> Result<AuthenticatedUser, AppError> {
        let auth_session = AuthSession::new(self.session);

        let Some(user_id) = auth_session.get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };
        let Some(access_token) = auth_session.get_access_token().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        for permission in permissions {
            match permission {
                Permission::Operator => {
                    if !self.operator_ids.is_empty() && !self.operator_ids.contains(&user_id) {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "User is not on the dashboard operator allow-list".to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(AuthenticatedUser {
            user_id,
            access_token,
        })
    }
}
