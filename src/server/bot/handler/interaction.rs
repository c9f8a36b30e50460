//! Button presses on bypass requests.

use serenity::all::{
    Context, CreateInteractionResponse, CreateInteractionResponseMessage, Interaction,
};

use crate::server::{
    bot::gateway::SerenityGateway,
    data::SettingsStore,
    model::bypass::{BypassAction, BypassOutcome},
    service::{bypass::BypassService, incident::IncidentRegistry},
};

/// Handles component interactions carrying a bypass custom ID; everything else is ignored.
pub async fn handle_interaction_create(
    store: &SettingsStore,
    incidents: &IncidentRegistry,
    ctx: Context,
    interaction: Interaction,
) {
    let Interaction::Component(component) = interaction else {
        return;
    };
    let Some(action) = BypassAction::parse(&component.data.custom_id) else {
        return;
    };

    let gateway = SerenityGateway::new(ctx.http.clone(), ctx.cache.clone());

    let response = match BypassService::new(store, incidents)
        .resolve(&gateway, action)
        .await
    {
        Ok(outcome) => build_response(&outcome, &action),
        Err(e) => {
            tracing::error!("Failed to resolve bypass {}: {}", action, e);
            ephemeral("Something went wrong while saving your answer. Please try again.")
        }
    };

    if let Err(e) = component.create_response(&ctx, response).await {
        tracing::warn!("Failed to answer bypass interaction {}: {}", action, e);
    }
}

/// Maps a resolution to the reply shown to the guild owner.
///
/// Resolved requests replace the original message and drop its buttons; repeated
/// clicks are acknowledged silently.
pub fn build_response(outcome: &BypassOutcome, action: &BypassAction) -> CreateInteractionResponse {
    match outcome {
        BypassOutcome::Approved { guild_name } => resolved(format!(
            "Approved. <@{}> can now join **{}** and their ban has been lifted.",
            action.user_id, guild_name
        )),
        BypassOutcome::Denied { guild_name } => resolved(format!(
            "Denied. <@{}> stays banned from **{}**.",
            action.user_id, guild_name
        )),
        BypassOutcome::AlreadyResolved => CreateInteractionResponse::Acknowledge,
        BypassOutcome::GuildUnavailable => {
            ephemeral("I can no longer access that server, so nothing was changed.")
        }
    }
}

fn resolved(content: String) -> CreateInteractionResponse {
    CreateInteractionResponse::UpdateMessage(
        CreateInteractionResponseMessage::new()
            .content(content)
            .embeds(Vec::new())
            .components(Vec::new()),
    )
}

fn ephemeral(content: &str) -> CreateInteractionResponse {
    CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .content(content)
            .ephemeral(true),
    )
}
