use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    model::{
        blacklist::BlacklistEntryDto,
        bot::{BotGuildDto, BotStatsDto},
        discord::{DiscordUserDto, UserGuildDto},
    },
    server::model::settings::UserSettings,
};

/// Everything the dashboard needs to render its first screen, in one request.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HandshakeDto {
    pub user: DiscordUserDto,
    pub user_guilds: Vec<UserGuildDto>,
    pub bot_stats: BotStatsDto,
    pub bot_guilds: Vec<BotGuildDto>,
    pub settings: UserSettings,
    pub blacklist: Vec<BlacklistEntryDto>,
}
