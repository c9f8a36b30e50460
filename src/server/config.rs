use std::path::PathBuf;

use crate::server::error::{config::ConfigError, AppError};

const DISCORD_AUTH_URL: &str = "https://discord.com/oauth2/authorize";
const DISCORD_TOKEN_URL: &str = "https://discord.com/api/oauth2/token";
const DISCORD_API_URL: &str = "https://discord.com/api/v10";

const DEFAULT_SETTINGS_PATH: &str = "data/settings.json";
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";
const DEFAULT_APP_URL: &str = "http://localhost:5173";

pub struct Config {
    pub discord_client_id: String,
    pub discord_client_secret: String,
    pub discord_redirect_url: String,

    pub discord_auth_url: String,
    pub discord_token_url: String,
    pub discord_api_url: String,

    /// Credential used when no registered bot account is active.
    pub discord_bot_token: Option<String>,

    pub settings_path: PathBuf,
    pub bind_address: String,
    /// Frontend origin, used for CORS and the post-login redirect.
    pub app_url: String,

    /// Discord user IDs allowed to use the dashboard. Empty allows every logged-in user.
    pub operator_ids: Vec<u64>,
    pub secure_cookies: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Empty values are treated the same as unset ones.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let optional = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let required = |name: &str| {
            optional(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        Ok(Self {
            discord_client_id: required("DISCORD_CLIENT_ID")?,
            discord_client_secret: required("DISCORD_CLIENT_SECRET")?,
            discord_redirect_url: required("DISCORD_REDIRECT_URL")?,
            discord_auth_url: DISCORD_AUTH_URL.to_string(),
            discord_token_url: DISCORD_TOKEN_URL.to_string(),
            discord_api_url: DISCORD_API_URL.to_string(),
            discord_bot_token: optional("DISCORD_BOT_TOKEN"),
            settings_path: optional("SETTINGS_PATH")
                .unwrap_or_else(|| DEFAULT_SETTINGS_PATH.to_string())
                .into(),
            bind_address: optional("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            app_url: optional("APP_URL")
                .unwrap_or_else(|| DEFAULT_APP_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            operator_ids: parse_operator_ids(optional("DASHBOARD_OPERATOR_IDS").as_deref())?,
            secure_cookies: parse_bool("SECURE_COOKIES", optional("SECURE_COOKIES").as_deref())?,
        })
    }
}

fn parse_operator_ids(value: Option<&str>) -> Result<Vec<u64>, ConfigError> {
    let Some(value) = value else {
        return Ok(Vec::new());
    };

    value
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(|id| {
            id.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
                name: "DASHBOARD_OPERATOR_IDS".to_string(),
                reason: format!("'{}' is not a Discord ID: {}", id, e),
            })
        })
        .collect()
}

fn parse_bool(name: &str, value: Option<&str>) -> Result<bool, ConfigError> {
    match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
        None => Ok(false),
        Some("1" | "true" | "yes") => Ok(true),
        Some("0" | "false" | "no") => Ok(false),
        Some(other) => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: format!("expected a boolean, got '{}'", other),
        }),
    }
}
