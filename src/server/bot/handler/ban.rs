use serenity::all::{Context, GuildId, User};

use crate::server::{
    bot::gateway::SerenityGateway,
    data::SettingsStore,
    model::ban::BannedUser,
    service::{enforcement::EnforcementService, incident::IncidentRegistry},
};

/// Handles a guild ban by appending it to the recent-ban history.
pub async fn handle_guild_ban_addition(
    store: &SettingsStore,
    incidents: &IncidentRegistry,
    ctx: Context,
    guild_id: GuildId,
    banned_user: User,
) {
    let gateway = SerenityGateway::new(ctx.http.clone(), ctx.cache.clone());

    if let Err(e) = EnforcementService::new(store, &gateway, incidents)
        .handle_ban(guild_id.get(), BannedUser::from(&banned_user))
        .await
    {
        tracing::error!(
            "Failed to record ban of {} in guild {}: {}",
            banned_user.id,
            guild_id,
            e
        );
    }
}
