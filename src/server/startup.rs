use axum::http::{header, HeaderValue, Method};
use oauth2::{AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use time::Duration;
use tower_http::cors::CorsLayer;
use tower_sessions::{cookie::SameSite, Expiry, MemoryStore, SessionManagerLayer};

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    state::OAuth2Client,
};

/// Days of inactivity after which a dashboard session expires.
const SESSION_INACTIVITY_DAYS: i64 = 7;

/// Creates the session layer backed by an in-memory store.
///
/// Sessions do not survive a restart; operators simply log in again.
pub fn setup_session_layer(config: &Config) -> SessionManagerLayer<MemoryStore> {
    SessionManagerLayer::new(MemoryStore::default())
        .with_secure(config.secure_cookies)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(Duration::days(SESSION_INACTIVITY_DAYS)))
}

/// Builds the HTTP client used for Discord REST calls.
///
/// Redirects are disabled so a response can never steer a request elsewhere.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .map_err(AppError::from)
}

/// Builds the Discord OAuth2 client.
///
/// # Returns
/// - `Ok(OAuth2Client)` - Client with auth, token and redirect URLs set
/// - `Err(ConfigError::InvalidEnvVar)` - One of the URLs does not parse
pub fn setup_oauth_client(config: &Config) -> Result<OAuth2Client, AppError> {
    let invalid_url = |name: &str, e: url::ParseError| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        reason: e.to_string(),
    };

    let client = oauth2::basic::BasicClient::new(ClientId::new(config.discord_client_id.clone()))
        .set_client_secret(ClientSecret::new(config.discord_client_secret.clone()))
        .set_auth_uri(
            AuthUrl::new(config.discord_auth_url.clone())
                .map_err(|e| invalid_url("DISCORD_AUTH_URL", e))?,
        )
        .set_token_uri(
            TokenUrl::new(config.discord_token_url.clone())
                .map_err(|e| invalid_url("DISCORD_TOKEN_URL", e))?,
        )
        .set_redirect_uri(
            RedirectUrl::new(config.discord_redirect_url.clone())
                .map_err(|e| invalid_url("DISCORD_REDIRECT_URL", e))?,
        );

    Ok(client)
}

/// Allows the dashboard frontend to call the API with its session cookie.
pub fn setup_cors_layer(config: &Config) -> Result<CorsLayer, AppError> {
    let origin = HeaderValue::from_str(&config.app_url).map_err(|e| ConfigError::InvalidEnvVar {
        name: "APP_URL".to_string(),
        reason: e.to_string(),
    })?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config::from_lookup(|name| match name {
            "DISCORD_CLIENT_ID" => Some("client".to_string()),
            "DISCORD_CLIENT_SECRET" => Some("secret".to_string()),
            "DISCORD_REDIRECT_URL" => Some("http://localhost:3000/api/auth/callback".to_string()),
            _ => None,
        })
        .unwrap()
    }

    /// Tests building the OAuth client from a valid configuration.
    ///
    /// Expected: authorization URL points at Discord with the configured redirect
    #[test]
    fn builds_oauth_client() {
        let client = setup_oauth_client(&config()).unwrap();

        let (url, _) = client.authorize_url(oauth2::CsrfToken::new_random).url();

        assert!(url.as_str().starts_with("https://discord.com/oauth2/authorize"));
        assert!(url.as_str().contains("client_id=client"));
    }

    /// Tests that a malformed redirect URL is reported as a configuration error.
    ///
    /// Expected: Err(InvalidEnvVar)
    #[test]
    fn rejects_invalid_redirect_url() {
        let mut config = config();
        config.discord_redirect_url = "not a url".to_string();

        assert!(matches!(
            setup_oauth_client(&config),
            Err(AppError::ConfigErr(ConfigError::InvalidEnvVar { .. }))
        ));
    }
}
