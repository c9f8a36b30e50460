use axum::{
    routing::{delete, get, post},
    Json, Router,
};
use utoipa::OpenApi;

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        blacklist::{AddBlacklistDto, BlacklistEntryDto},
        bot::{AddBotAccountDto, BotAccountDto, BotGuildDto, BotStatsDto, SwitchBotDto},
        bypass::{BypassListDto, BypassRequestDto},
        dev::UpdateDevScopeDto,
        discord::{DiscordUserDto, UserGuildDto},
        handshake::HandshakeDto,
    },
    server::{
        controller::{auth, blacklist, bot, bypass, dev, handshake, history, settings},
        model::{
            ban::BanRecord,
            settings::{DevScopeSettings, UserSettings},
            suspicious_bot::SuspiciousBot,
        },
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Guild Guard API"),
    paths(
        auth::login,
        auth::callback,
        auth::logout,
        handshake::handshake,
        settings::get_settings,
        settings::update_settings,
        blacklist::get_blacklist,
        blacklist::add_to_blacklist,
        blacklist::remove_from_blacklist,
        history::get_recent_bans,
        history::get_suspicious_bots,
        bypass::get_bypasses,
        bypass::grant_bypass,
        dev::list_bots,
        dev::register_bot,
        dev::remove_bot,
        dev::switch_bot,
        dev::get_dev_settings,
        dev::update_dev_settings,
        bot::get_status,
        bot::start_bot,
        bot::stop_bot,
        bot::leave_guild,
    ),
    components(schemas(
        ErrorDto,
        SuccessDto,
        AddBlacklistDto,
        BlacklistEntryDto,
        AddBotAccountDto,
        BotAccountDto,
        BotGuildDto,
        BotStatsDto,
        SwitchBotDto,
        BypassListDto,
        BypassRequestDto,
        UpdateDevScopeDto,
        DiscordUserDto,
        UserGuildDto,
        HandshakeDto,
        BanRecord,
        DevScopeSettings,
        UserSettings,
        SuspiciousBot,
    )),
    tags(
        (name = "auth", description = "Discord OAuth login"),
        (name = "handshake", description = "Dashboard bootstrap"),
        (name = "settings", description = "Per-user dashboard settings"),
        (name = "blacklist", description = "Global blacklist management"),
        (name = "history", description = "Ban history and bot scan findings"),
        (name = "bypass", description = "Per-guild blacklist exemptions"),
        (name = "dev", description = "Bot accounts and data scope"),
        (name = "bot", description = "Bot session lifecycle"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", get(auth::login))
        .route("/api/auth/callback", get(auth::callback))
        .route("/api/auth/logout", get(auth::logout))
        .route("/api/handshake", get(handshake::handshake))
        .route(
            "/api/settings",
            get(settings::get_settings).post(settings::update_settings),
        )
        .route(
            "/api/blacklist",
            get(blacklist::get_blacklist).post(blacklist::add_to_blacklist),
        )
        .route(
            "/api/blacklist/{user_id}",
            delete(blacklist::remove_from_blacklist),
        )
        .route("/api/recent-bans", get(history::get_recent_bans))
        .route("/api/suspicious-bots", get(history::get_suspicious_bots))
        .route("/api/bypass", post(bypass::grant_bypass))
        .route("/api/bypass/{guild_id}", get(bypass::get_bypasses))
        .route("/api/dev/bots", get(dev::list_bots).post(dev::register_bot))
        .route("/api/dev/bots/switch", post(dev::switch_bot))
        .route("/api/dev/bots/{client_id}", delete(dev::remove_bot))
        .route(
            "/api/dev/settings",
            get(dev::get_dev_settings).post(dev::update_dev_settings),
        )
        .route("/api/bot/status", get(bot::get_status))
        .route("/api/bot/start", post(bot::start_bot))
        .route("/api/bot/stop", post(bot::stop_bot))
        .route("/api/guilds/{guild_id}/leave", post(bot::leave_guild))
        .route(
            "/api/docs/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        )
}
