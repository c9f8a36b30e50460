//! Recording `ModerationGateway` for service tests.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use serenity::async_trait;

use super::ModerationGateway;
use crate::server::model::{
    bypass::BypassNotice,
    moderation::{BotMemberSnapshot, GuildSummary, ResolvedUser},
};

/// A side effect the gateway was asked to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayCall {
    Ban { guild_id: u64, user_id: u64, reason: String },
    Unban { guild_id: u64, user_id: u64 },
    BypassRequest { owner_id: u64, guild_id: u64, user_id: u64 },
}

#[derive(Default)]
pub struct MockGateway {
    pub guilds: HashMap<u64, GuildSummary>,
    pub ban_reasons: HashMap<(u64, u64), String>,
    pub members: HashMap<u64, Vec<BotMemberSnapshot>>,
    pub users: HashMap<u64, ResolvedUser>,
    /// Guilds whose member listing fails.
    pub failing_guilds: HashSet<u64>,
    pub fail_ban: bool,
    pub fail_unban: bool,
    pub fail_dm: bool,
    calls: Mutex<Vec<GatewayCall>>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_guild(mut self, guild_id: u64, name: &str, owner_id: u64) -> Self {
        self.guilds.insert(
            guild_id,
            GuildSummary {
                id: guild_id,
                name: name.to_string(),
                owner_id,
            },
        );
        self
    }

    pub fn with_members(mut self, guild_id: u64, members: Vec<BotMemberSnapshot>) -> Self {
        self.members.insert(guild_id, members);
        self
    }

    pub fn with_user(mut self, user_id: u64, username: &str) -> Self {
        self.users.insert(
            user_id,
            ResolvedUser {
                id: user_id,
                username: username.to_string(),
                global_name: None,
                avatar: None,
            },
        );
        self
    }

    pub fn calls(&self) -> Vec<GatewayCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: GatewayCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl ModerationGateway for MockGateway {
    async fn guild_summary(&self, guild_id: u64) -> Option<GuildSummary> {
        self.guilds.get(&guild_id).cloned()
    }

    async fn ban(&self, guild_id: u64, user_id: u64, reason: &str) -> Result<(), serenity::Error> {
        if self.fail_ban {
            return Err(serenity::Error::Other("ban rejected"));
        }
        self.record(GatewayCall::Ban {
            guild_id,
            user_id,
            reason: reason.to_string(),
        });
        Ok(())
    }

    async fn unban(&self, guild_id: u64, user_id: u64) -> Result<(), serenity::Error> {
        if self.fail_unban {
            return Err(serenity::Error::Other("unban rejected"));
        }
        self.record(GatewayCall::Unban { guild_id, user_id });
        Ok(())
    }

    async fn ban_reason(&self, guild_id: u64, user_id: u64) -> Option<String> {
        self.ban_reasons.get(&(guild_id, user_id)).cloned()
    }

    async fn send_bypass_request(
        &self,
        owner_id: u64,
        notice: &BypassNotice,
    ) -> Result<(), serenity::Error> {
        if self.fail_dm {
            return Err(serenity::Error::Other("dm closed"));
        }
        self.record(GatewayCall::BypassRequest {
            owner_id,
            guild_id: notice.guild_id,
            user_id: notice.user_id,
        });
        Ok(())
    }

    async fn guild_ids(&self) -> Vec<u64> {
        let mut ids: Vec<u64> = self.guilds.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    async fn bot_members(&self, guild_id: u64) -> Result<Vec<BotMemberSnapshot>, serenity::Error> {
        if self.failing_guilds.contains(&guild_id) {
            return Err(serenity::Error::Other("members unavailable"));
        }
        Ok(self.members.get(&guild_id).cloned().unwrap_or_default())
    }

    async fn fetch_user(&self, user_id: u64) -> Result<ResolvedUser, serenity::Error> {
        self.users
            .get(&user_id)
            .cloned()
            .ok_or(serenity::Error::Other("unknown user"))
    }
}
