use serde::{Deserialize, Serialize};

/// A registered bot credential the gateway session can run under.
///
/// The token and secret never leave the server; the dashboard receives
/// `BotAccountDto` instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BotAccount {
    pub client_id: String,
    pub token: String,
    #[serde(default)]
    pub secret_id: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl BotAccount {
    /// Converts the account to its public representation.
    pub fn into_dto(self, active_bot_id: Option<&str>) -> crate::model::bot::BotAccountDto {
        crate::model::bot::BotAccountDto {
            is_active: active_bot_id == Some(self.client_id.as_str()),
            client_id: self.client_id,
            display_name: self.display_name,
            avatar: self.avatar,
        }
    }
}
