use std::sync::Mutex;

use serenity::all::{Context, EventHandler, GuildId, Interaction, Member, Ready, User};
use serenity::async_trait;
use tokio::sync::oneshot;

use crate::server::{data::SettingsStore, service::incident::IncidentRegistry};

pub mod ban;
pub mod interaction;
pub mod member;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub store: SettingsStore,
    pub incidents: IncidentRegistry,
    /// Signals the manager on the first Ready of the session.
    ready_tx: Mutex<Option<oneshot::Sender<()>>>,
}

impl Handler {
    pub fn new(
        store: SettingsStore,
        incidents: IncidentRegistry,
        ready_tx: oneshot::Sender<()>,
    ) -> Self {
        Self {
            store,
            incidents,
            ready_tx: Mutex::new(Some(ready_tx)),
        }
    }

    fn take_ready_tx(&self) -> Option<oneshot::Sender<()>> {
        match self.ready_tx.lock() {
            Ok(mut guard) => guard.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(&self.store, self.take_ready_tx(), ctx, ready).await;
    }

    /// Called when a member joins a guild
    async fn guild_member_addition(&self, ctx: Context, new_member: Member) {
        member::handle_guild_member_addition(&self.store, &self.incidents, ctx, new_member).await;
    }

    /// Called when a user is banned from a guild
    async fn guild_ban_addition(&self, ctx: Context, guild_id: GuildId, banned_user: User) {
        ban::handle_guild_ban_addition(&self.store, &self.incidents, ctx, guild_id, banned_user)
            .await;
    }

    /// Called when a user presses a button or submits a command
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction_create(&self.store, &self.incidents, ctx, interaction)
            .await;
    }
}
