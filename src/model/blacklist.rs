use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A blacklisted user enriched with the profile the bot session could resolve.
///
/// Unresolvable users (deleted accounts, no running session) carry only the ID.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlacklistEntryDto {
    pub id: String,
    pub username: Option<String>,
    pub global_name: Option<String>,
    pub avatar: Option<String>,
}

impl BlacklistEntryDto {
    pub fn unresolved(id: String) -> Self {
        Self {
            id,
            username: None,
            global_name: None,
            avatar: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddBlacklistDto {
    pub user_id: String,
}
