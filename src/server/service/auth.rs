//! Discord OAuth2 login and dashboard user identity.

use oauth2::{AuthorizationCode, CsrfToken, Scope, TokenResponse};
use reqwest::StatusCode;
use serde::{de::DeserializeOwned, Deserialize};
use url::Url;

use crate::{
    model::discord::{DiscordUserDto, UserGuildDto},
    server::{
        error::{auth::AuthError, AppError},
        state::OAuth2Client,
    },
};

/// User object returned by Discord's `/users/@me`.
#[derive(Debug, Deserialize)]
struct DiscordUser {
    id: String,
    username: String,
    global_name: Option<String>,
    avatar: Option<String>,
}

/// Partial guild returned by Discord's `/users/@me/guilds`.
#[derive(Debug, Deserialize)]
struct PartialGuild {
    id: String,
    name: String,
    icon: Option<String>,
    #[serde(default)]
    owner: bool,
    #[serde(default)]
    permissions: String,
}

/// Service for the OAuth2 login flow and for reading the logged-in user from Discord.
pub struct AuthService<'a> {
    http_client: &'a reqwest::Client,
    oauth_client: &'a OAuth2Client,
    /// Base URL of Discord's REST API, without trailing slash.
    api_url: &'a str,
}

impl<'a> AuthService<'a> {
    pub fn new(
        http_client: &'a reqwest::Client,
        oauth_client: &'a OAuth2Client,
        api_url: &'a str,
    ) -> Self {
        Self {
            http_client,
            oauth_client,
            api_url,
        }
    }

    /// Generates a Discord OAuth2 login URL with CSRF protection.
    ///
    /// Requests the `identify` and `guilds` scopes.
    ///
    /// # Returns
    /// - `(Url, CsrfToken)` - Tuple containing the authorization URL and CSRF state token
    pub fn login_url(&self) -> (Url, CsrfToken) {
        self.oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("identify".to_string()))
            .add_scope(Scope::new("guilds".to_string()))
            .url()
    }

    /// Exchanges the authorization code and identifies the user.
    ///
    /// # Returns
    /// - `Ok((DiscordUserDto, String))` - The user and the access token to keep in the session
    /// - `Err(AppError::AuthErr(RequestTokenErr))` - Code exchange failed
    /// - `Err(AppError::ReqwestErr)` - Fetching the user from Discord failed
    pub async fn callback(
        &self,
        authorization_code: String,
    ) -> Result<(DiscordUserDto, String), AppError> {
        let token = self
            .oauth_client
            .exchange_code(AuthorizationCode::new(authorization_code))
            .request_async(self.http_client)
            .await
            .map_err(|e| AuthError::RequestTokenErr(e.to_string()))?;

        let access_token = token.access_token().secret().clone();
        let user = self.fetch_user(&access_token).await?;

        Ok((user, access_token))
    }

    /// Fetches the user owning an access token.
    ///
    /// # Returns
    /// - `Ok(DiscordUserDto)` - The user
    /// - `Err(AppError::AuthErr(TokenRejected))` - Discord answered 401
    /// - `Err(AppError::ReqwestErr)` - Any other request failure
    pub async fn fetch_user(&self, access_token: &str) -> Result<DiscordUserDto, AppError> {
        let user: DiscordUser = self.get_json("/users/@me", access_token).await?;

        Ok(DiscordUserDto {
            id: user.id,
            username: user.username,
            global_name: user.global_name,
            avatar: user.avatar,
        })
    }

    /// Fetches the guilds of the user owning an access token.
    ///
    /// `bot_present` is left false; the caller fills it from the bot session.
    pub async fn fetch_user_guilds(&self, access_token: &str) -> Result<Vec<UserGuildDto>, AppError> {
        let guilds: Vec<PartialGuild> = self.get_json("/users/@me/guilds", access_token).await?;

        Ok(guilds
            .into_iter()
            .map(|guild| UserGuildDto {
                id: guild.id,
                name: guild.name,
                icon: guild.icon,
                owner: guild.owner,
                permissions: guild.permissions,
                bot_present: false,
            })
            .collect())
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        access_token: &str,
    ) -> Result<T, AppError> {
        let response = self
            .http_client
            .get(format!("{}{}", self.api_url, path))
            .bearer_auth(access_token)
            .send()
            .await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            return Err(AuthError::TokenRejected.into());
        }

        Ok(response.error_for_status()?.json::<T>().await?)
    }
}
