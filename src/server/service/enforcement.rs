//! Blacklist enforcement on guild membership events.
//!
//! Joins are checked against the effective blacklist and the guild's bypass list;
//! a blacklisted, non-exempt user is banned and the guild owner is asked whether to
//! let them in. Every ban observed by the session, automatic or manual, is appended
//! to the recent-ban history.

use chrono::Utc;

use crate::server::{
    bot::gateway::ModerationGateway,
    data::{BlacklistRepository, BypassRepository, RecentBanRepository, SettingsStore},
    error::AppError,
    model::{
        ban::{BanRecord, BannedUser},
        bypass::BypassNotice,
        moderation::{JoinOutcome, MemberJoin},
    },
    service::incident::IncidentRegistry,
};

/// Audit log reason attached to automatic bans.
pub const BLACKLIST_BAN_REASON: &str = "Guild Guard: user is on the global blacklist";

pub struct EnforcementService<'a> {
    store: &'a SettingsStore,
    gateway: &'a dyn ModerationGateway,
    incidents: &'a IncidentRegistry,
}

impl<'a> EnforcementService<'a> {
    pub fn new(
        store: &'a SettingsStore,
        gateway: &'a dyn ModerationGateway,
        incidents: &'a IncidentRegistry,
    ) -> Self {
        Self {
            store,
            gateway,
            incidents,
        }
    }

    /// Evaluates a member join against the blacklist.
    ///
    /// A blacklisted user without a bypass for the guild is banned with
    /// `BLACKLIST_BAN_REASON`. After a successful ban the guild owner receives a
    /// direct message with allow/deny buttons; a delivered message opens a pending
    /// incident. Ban and delivery failures are logged and never retried.
    ///
    /// # Arguments
    /// - `join` - The guild, user and display name of the joining member
    ///
    /// # Returns
    /// - `JoinOutcome` - What enforcement did
    pub async fn handle_join(&self, join: MemberJoin) -> JoinOutcome {
        let MemberJoin {
            guild_id,
            user_id,
            display_name,
        } = join;

        if !BlacklistRepository::new(self.store).contains(user_id).await {
            return JoinOutcome::Allowed;
        }

        if BypassRepository::new(self.store)
            .contains(guild_id, user_id)
            .await
        {
            tracing::info!(
                "Blacklisted user {} joined guild {} with a bypass",
                user_id,
                guild_id
            );
            return JoinOutcome::Bypassed;
        }

        if let Err(e) = self
            .gateway
            .ban(guild_id, user_id, BLACKLIST_BAN_REASON)
            .await
        {
            tracing::error!(
                "Failed to ban blacklisted user {} from guild {}: {}",
                user_id,
                guild_id,
                e
            );
            return JoinOutcome::BanFailed;
        }

        tracing::info!(
            "Banned blacklisted user {} ({}) from guild {}",
            display_name,
            user_id,
            guild_id
        );

        let owner_notified = self
            .notify_owner(guild_id, user_id, display_name)
            .await;

        JoinOutcome::Banned { owner_notified }
    }

    /// Sends the bypass request to the guild owner.
    ///
    /// # Returns
    /// - `true` - The message was delivered and a pending incident opened
    /// - `false` - Guild unresolvable or delivery failed; logged
    async fn notify_owner(&self, guild_id: u64, user_id: u64, display_name: String) -> bool {
        let Some(guild) = self.gateway.guild_summary(guild_id).await else {
            tracing::warn!(
                "Could not resolve owner of guild {} to request a bypass for {}",
                guild_id,
                user_id
            );
            return false;
        };

        let notice = BypassNotice {
            guild_id,
            guild_name: guild.name,
            user_id,
            user_display_name: display_name,
        };

        match self
            .gateway
            .send_bypass_request(guild.owner_id, &notice)
            .await
        {
            Ok(()) => {
                self.incidents.open(guild_id, user_id);
                true
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to send bypass request to owner {} of guild {}: {}",
                    guild.owner_id,
                    guild_id,
                    e
                );
                false
            }
        }
    }

    /// Records a ban observed in a guild.
    ///
    /// The reason is looked up from the guild's ban list and the guild name from the
    /// session; both are best-effort and stay empty when unavailable.
    ///
    /// # Returns
    /// - `Ok(BanRecord)` - The record appended to the history
    /// - `Err(AppError::StoreErr)` - The history could not be persisted
    pub async fn handle_ban(&self, guild_id: u64, user: BannedUser) -> Result<BanRecord, AppError> {
        let reason = self.gateway.ban_reason(guild_id, user.id).await;
        let guild_name = self
            .gateway
            .guild_summary(guild_id)
            .await
            .map(|guild| guild.name)
            .unwrap_or_default();

        let record = BanRecord {
            user_id: user.id.to_string(),
            username: user.username,
            display_name: user.display_name,
            avatar: user.avatar,
            guild_id: guild_id.to_string(),
            guild_name,
            reason,
            timestamp: Utc::now(),
        };

        RecentBanRepository::new(self.store)
            .add(record.clone())
            .await?;

        tracing::debug!(
            "Recorded ban of {} in guild {}",
            record.user_id,
            record.guild_id
        );

        Ok(record)
    }
}
