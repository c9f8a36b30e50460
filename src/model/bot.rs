use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A registered bot account without its credentials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BotAccountDto {
    pub client_id: String,
    pub display_name: String,
    pub avatar: Option<String>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddBotAccountDto {
    /// Defaults to the bot user's ID when omitted.
    pub client_id: Option<String>,
    pub token: String,
    pub secret_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SwitchBotDto {
    pub client_id: String,
}

/// Live statistics of the gateway session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BotStatsDto {
    pub online: bool,
    pub id: Option<String>,
    pub username: Option<String>,
    pub avatar: Option<String>,
    pub guild_count: usize,
    pub member_count: u64,
    pub started_at: Option<DateTime<Utc>>,
}

impl BotStatsDto {
    pub fn offline() -> Self {
        Self {
            online: false,
            id: None,
            username: None,
            avatar: None,
            guild_count: 0,
            member_count: 0,
            started_at: None,
        }
    }
}

/// A guild the bot session is a member of.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BotGuildDto {
    pub id: String,
    pub name: String,
    pub icon: Option<String>,
    pub member_count: u64,
}
