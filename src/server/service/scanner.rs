//! Periodic scan for unverified bots holding administrator rights.

use crate::server::{
    bot::gateway::ModerationGateway,
    data::{SettingsStore, SuspiciousBotRepository},
    error::AppError,
    model::suspicious_bot::SuspiciousBot,
};

pub const SUSPICIOUS_BOT_REASON: &str = "Unverified bot with Administrator permission";

pub struct ScannerService<'a> {
    store: &'a SettingsStore,
    gateway: &'a dyn ModerationGateway,
}

impl<'a> ScannerService<'a> {
    pub fn new(store: &'a SettingsStore, gateway: &'a dyn ModerationGateway) -> Self {
        Self { store, gateway }
    }

    /// Scans every guild of the session and replaces the stored suspicious-bot list.
    ///
    /// A guild whose members cannot be listed is skipped for this cycle.
    ///
    /// # Returns
    /// - `Ok(Vec<SuspiciousBot>)` - The new list
    /// - `Err(AppError::StoreErr)` - The list could not be persisted
    pub async fn scan(&self) -> Result<Vec<SuspiciousBot>, AppError> {
        let mut flagged = Vec::new();

        for guild_id in self.gateway.guild_ids().await {
            let members = match self.gateway.bot_members(guild_id).await {
                Ok(members) => members,
                Err(e) => {
                    tracing::warn!("Skipping guild {} in bot scan: {}", guild_id, e);
                    continue;
                }
            };

            let guild_name = self
                .gateway
                .guild_summary(guild_id)
                .await
                .map(|guild| guild.name)
                .unwrap_or_default();

            flagged.extend(
                members
                    .into_iter()
                    .filter(|member| member.administrator && !member.verified)
                    .map(|member| SuspiciousBot {
                        id: member.id.to_string(),
                        username: member.username,
                        avatar: member.avatar,
                        guild_id: guild_id.to_string(),
                        guild_name: guild_name.clone(),
                        reason: SUSPICIOUS_BOT_REASON.to_string(),
                    }),
            );
        }

        SuspiciousBotRepository::new(self.store)
            .replace(flagged.clone())
            .await?;

        tracing::info!("Bot scan finished, {} suspicious bots", flagged.len());

        Ok(flagged)
    }
}
