use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BypassRequestDto {
    pub guild_id: String,
    pub user_id: String,
}

/// Users exempt from blacklist enforcement in one guild.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BypassListDto {
    pub guild_id: String,
    pub user_ids: Vec<String>,
}
