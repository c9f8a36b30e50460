use serenity::all::{Context, Member};

use crate::server::{
    bot::gateway::SerenityGateway,
    data::SettingsStore,
    model::moderation::MemberJoin,
    service::{enforcement::EnforcementService, incident::IncidentRegistry},
};

/// Handles a member joining a guild by running blacklist enforcement.
pub async fn handle_guild_member_addition(
    store: &SettingsStore,
    incidents: &IncidentRegistry,
    ctx: Context,
    new_member: Member,
) {
    let gateway = SerenityGateway::new(ctx.http.clone(), ctx.cache.clone());

    let join = MemberJoin {
        guild_id: new_member.guild_id.get(),
        user_id: new_member.user.id.get(),
        display_name: new_member.display_name().to_string(),
    };

    let outcome = EnforcementService::new(store, &gateway, incidents)
        .handle_join(join)
        .await;

    tracing::debug!(
        "Member {} joined guild {}: {:?}",
        new_member.user.id,
        new_member.guild_id,
        outcome
    );
}
