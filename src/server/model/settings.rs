use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Dashboard preferences of one operator.
///
/// Every field has a default so partially stored or partially posted settings
/// deserialize cleanly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct UserSettings {
    pub language: String,
    pub theme: String,
    pub sort_mode: String,
    pub custom_guild_order: Vec<String>,
    pub furigana: bool,
    pub developer_mode: bool,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            theme: "dark".to_string(),
            sort_mode: "default".to_string(),
            custom_guild_order: Vec::new(),
            furigana: false,
            developer_mode: false,
        }
    }
}

/// Whether reads resolve to the shared aggregate or the active bot's partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DevScopeSettings {
    pub is_blacklist_shared: bool,
    pub is_recent_bans_shared: bool,
}

impl Default for DevScopeSettings {
    fn default() -> Self {
        Self {
            is_blacklist_shared: true,
            is_recent_bans_shared: true,
        }
    }
}
