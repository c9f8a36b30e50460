//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and cloned into each handler
//! through Axum's state extraction. Every field is cheap to clone: the store and the bot
//! manager share their contents behind `Arc`s.

use std::sync::Arc;

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};

use crate::server::{bot::manager::BotManager, data::SettingsStore};

/// Type alias for the OAuth2 client configured for Discord authentication.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

#[derive(Clone)]
pub struct AppState {
    /// Cached settings document and its on-disk file.
    pub store: SettingsStore,

    /// HTTP client for Discord REST calls made with the user's access token.
    ///
    /// Configured without redirects.
    pub http_client: reqwest::Client,

    pub oauth_client: OAuth2Client,

    /// Owner of the single gateway session and of the bypass incident registry it
    /// shares with the dashboard.
    pub bot: BotManager,

    /// Discord user IDs allowed to use the dashboard. Empty allows everyone.
    pub operator_ids: Arc<[u64]>,

    /// Frontend origin the OAuth callback redirects to.
    pub app_url: String,

    /// Base URL of Discord's REST API.
    pub discord_api_url: String,
}
