use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, bot::BotGuildDto, discord::UserGuildDto, handshake::HandshakeDto},
    server::{
        controller::as_gateway,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::{auth::AuthService, blacklist::BlacklistService, settings::SettingsService},
        state::AppState,
    },
};

pub static HANDSHAKE_TAG: &str = "handshake";

/// Loads everything the dashboard renders on its first screen.
///
/// The user's guilds are fetched with their own access token and flagged with whether
/// the running bot session shares them.
#[utoipa::path(
    get,
    path = "/api/handshake",
    tag = HANDSHAKE_TAG,
    responses(
        (status = 200, description = "Dashboard bootstrap data", body = HandshakeDto),
        (status = 401, description = "Not logged in or access token rejected", body = ErrorDto),
        (status = 403, description = "Not a dashboard operator", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn handshake(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.operator_ids, &session)
        .require(&[Permission::Operator])
        .await?;

    let auth_service = AuthService::new(
        &state.http_client,
        &state.oauth_client,
        &state.discord_api_url,
    );
    let discord_user = auth_service.fetch_user(&user.access_token).await?;
    let user_guilds = auth_service.fetch_user_guilds(&user.access_token).await?;

    let bot_guilds = state.bot.guilds().await;
    let gateway = state.bot.gateway().await;

    let dto = HandshakeDto {
        user: discord_user,
        user_guilds: mark_bot_presence(user_guilds, &bot_guilds),
        bot_stats: state.bot.status().await,
        bot_guilds,
        settings: SettingsService::new(&state.store).get(user.user_id).await,
        blacklist: BlacklistService::new(&state.store)
            .get_resolved(as_gateway(&gateway))
            .await,
    };

    Ok((StatusCode::OK, Json(dto)))
}

fn mark_bot_presence(guilds: Vec<UserGuildDto>, bot_guilds: &[BotGuildDto]) -> Vec<UserGuildDto> {
    guilds
        .into_iter()
        .map(|guild| UserGuildDto {
            bot_present: bot_guilds.iter().any(|bot_guild| bot_guild.id == guild.id),
            ..guild
        })
        .collect()
}
