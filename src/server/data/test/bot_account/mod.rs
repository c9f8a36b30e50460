use super::*;
use crate::server::model::bot_account::BotAccount;

mod delete;
mod set_active;
mod upsert;

fn account(client_id: &str) -> BotAccount {
    BotAccount {
        client_id: client_id.to_string(),
        token: format!("secret-token-{}", client_id),
        secret_id: String::new(),
        display_name: format!("Bot {}", client_id),
        avatar: None,
    }
}
