//! Bypass approval workflow.
//!
//! Resolves owner responses to bypass requests and grants bypasses from the
//! dashboard. This is the only writer of the bypass lists.

use crate::server::{
    bot::gateway::ModerationGateway,
    data::{BypassRepository, SettingsStore},
    error::AppError,
    model::bypass::{BypassAction, BypassDecision, BypassOutcome},
    service::incident::IncidentRegistry,
};

pub struct BypassService<'a> {
    store: &'a SettingsStore,
    incidents: &'a IncidentRegistry,
}

impl<'a> BypassService<'a> {
    pub fn new(store: &'a SettingsStore, incidents: &'a IncidentRegistry) -> Self {
        Self { store, incidents }
    }

    /// Applies an owner's allow/deny response.
    ///
    /// Only the first response for a pending incident changes anything; later or
    /// concurrent ones come back as `AlreadyResolved`. When the guild can no longer be
    /// resolved the incident is released untouched.
    ///
    /// # Arguments
    /// - `gateway` - Session used to resolve the guild and lift the ban
    /// - `action` - Decoded button press
    ///
    /// # Returns
    /// - `Ok(BypassOutcome)` - What the response did
    /// - `Err(AppError::StoreErr)` - Persisting the bypass failed; the incident stays pending
    pub async fn resolve(
        &self,
        gateway: &dyn ModerationGateway,
        action: BypassAction,
    ) -> Result<BypassOutcome, AppError> {
        let BypassAction {
            decision,
            guild_id,
            user_id,
        } = action;

        if !self.incidents.claim(guild_id, user_id) {
            tracing::debug!(
                "Ignoring response to resolved bypass incident {}/{}",
                guild_id,
                user_id
            );
            return Ok(BypassOutcome::AlreadyResolved);
        }

        let Some(guild) = gateway.guild_summary(guild_id).await else {
            self.incidents.release(guild_id, user_id);
            return Ok(BypassOutcome::GuildUnavailable);
        };

        match decision {
            BypassDecision::Allow => {
                if let Err(e) = BypassRepository::new(self.store)
                    .add(guild_id, user_id)
                    .await
                {
                    self.incidents.release(guild_id, user_id);
                    return Err(e.into());
                }

                lift_ban(gateway, guild_id, user_id).await;
                self.incidents.complete(guild_id, user_id, decision);

                tracing::info!("Bypass approved for user {} in {}", user_id, guild.name);

                Ok(BypassOutcome::Approved {
                    guild_name: guild.name,
                })
            }
            BypassDecision::Deny => {
                self.incidents.complete(guild_id, user_id, decision);

                tracing::info!("Bypass denied for user {} in {}", user_id, guild.name);

                Ok(BypassOutcome::Denied {
                    guild_name: guild.name,
                })
            }
        }
    }

    /// Grants a bypass requested from the dashboard.
    ///
    /// Goes through the same path as an approval: the pair is exempted, the ban lifted
    /// when a session is available, and any pending incident closed.
    ///
    /// # Returns
    /// - `Ok(Vec<String>)` - The guild's bypass list after the grant
    /// - `Err(AppError::StoreErr)` - Persisting the bypass failed
    pub async fn grant(
        &self,
        gateway: Option<&dyn ModerationGateway>,
        guild_id: u64,
        user_id: u64,
    ) -> Result<Vec<String>, AppError> {
        let repo = BypassRepository::new(self.store);
        repo.add(guild_id, user_id).await?;

        match gateway {
            Some(gateway) => lift_ban(gateway, guild_id, user_id).await,
            None => tracing::warn!(
                "No bot session; ban of {} in guild {} was not lifted",
                user_id,
                guild_id
            ),
        }

        self.incidents
            .complete(guild_id, user_id, BypassDecision::Allow);

        Ok(repo.get_by_guild(guild_id).await)
    }

    pub async fn get_by_guild(&self, guild_id: u64) -> Vec<String> {
        BypassRepository::new(self.store)
            .get_by_guild(guild_id)
            .await
    }
}

async fn lift_ban(gateway: &dyn ModerationGateway, guild_id: u64, user_id: u64) {
    if let Err(e) = gateway.unban(guild_id, user_id).await {
        tracing::warn!(
            "Failed to lift ban of {} in guild {}: {}",
            user_id,
            guild_id,
            e
        );
    }
}
