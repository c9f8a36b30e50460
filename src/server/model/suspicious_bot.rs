use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// An unverified bot member found holding administrator rights during a scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuspiciousBot {
    pub id: String,
    pub username: String,
    pub avatar: Option<String>,
    pub guild_id: String,
    pub guild_name: String,
    pub reason: String,
}
