use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One observed guild ban, appended to the recent-ban history.
///
/// Records are immutable once created and only leave the history when the bounded
/// ring evicts them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BanRecord {
    pub user_id: String,
    pub username: String,
    pub display_name: String,
    pub avatar: Option<String>,
    pub guild_id: String,
    pub guild_name: String,
    pub reason: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// The user named by a ban event, before the guild-side details are resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct BannedUser {
    pub id: u64,
    pub username: String,
    pub display_name: String,
    pub avatar: Option<String>,
}

impl From<&serenity::all::User> for BannedUser {
    fn from(user: &serenity::all::User) -> Self {
        Self {
            id: user.id.get(),
            username: user.name.clone(),
            display_name: user.global_name.clone().unwrap_or_else(|| user.name.clone()),
            avatar: user.avatar_url(),
        }
    }
}
