use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Partial update of the scope toggles; absent fields keep their value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDevScopeDto {
    pub is_blacklist_shared: Option<bool>,
    pub is_recent_bans_shared: Option<bool>,
}
