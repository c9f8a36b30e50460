use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The logged-in dashboard user, as reported by Discord.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DiscordUserDto {
    pub id: String,
    pub username: String,
    pub global_name: Option<String>,
    pub avatar: Option<String>,
}

/// A guild the logged-in user belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserGuildDto {
    pub id: String,
    pub name: String,
    pub icon: Option<String>,
    pub owner: bool,
    /// Permission bitset of the user in the guild, as a decimal string.
    pub permissions: String,
    /// Whether the running bot session is a member of the guild.
    pub bot_present: bool,
}
