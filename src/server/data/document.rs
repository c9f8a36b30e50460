//! The persisted settings document and its scope rules.
//!
//! The whole application state lives in one JSON object. Blacklist and ban-history
//! writes always land in both the global list and the active bot's partition, while
//! reads resolve to exactly one of them depending on the scope flags. Turning shared
//! mode off therefore reveals the bot's own complete copy instead of an empty list.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::server::model::{
    ban::BanRecord,
    bot_account::BotAccount,
    settings::{DevScopeSettings, UserSettings},
    suspicious_bot::SuspiciousBot,
};

/// Number of ban records retained per history scope.
pub const RECENT_BAN_LIMIT: usize = 50;

/// Blacklist and ban history private to one bot account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BotPartition {
    pub blacklist: Vec<String>,
    pub recent_bans: Vec<BanRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreDocument {
    /// Most recently added first.
    #[serde(default)]
    pub global_blacklist: Vec<String>,
    /// Most recent first, capped at `RECENT_BAN_LIMIT`.
    #[serde(default)]
    pub recent_bans: Vec<BanRecord>,
    #[serde(default)]
    pub bot_data: BTreeMap<String, BotPartition>,
    #[serde(default)]
    pub bot_accounts: Vec<BotAccount>,
    #[serde(default)]
    pub active_bot_id: Option<String>,
    #[serde(default = "default_shared")]
    pub is_blacklist_shared: bool,
    #[serde(default = "default_shared")]
    pub is_recent_bans_shared: bool,
    #[serde(default)]
    pub suspicious_bots: Vec<SuspiciousBot>,
    #[serde(default)]
    pub server_bypasses: BTreeMap<String, Vec<String>>,
    /// Every other top-level key: dashboard settings keyed by Discord user ID, plus
    /// keys this version does not know, which are written back untouched.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

fn default_shared() -> bool {
    true
}

impl Default for StoreDocument {
    fn default() -> Self {
        Self {
            global_blacklist: Vec::new(),
            recent_bans: Vec::new(),
            bot_data: BTreeMap::new(),
            bot_accounts: Vec::new(),
            active_bot_id: None,
            is_blacklist_shared: true,
            is_recent_bans_shared: true,
            suspicious_bots: Vec::new(),
            server_bypasses: BTreeMap::new(),
            extra: BTreeMap::new(),
        }
    }
}

impl StoreDocument {
    pub fn scope(&self) -> DevScopeSettings {
        DevScopeSettings {
            is_blacklist_shared: self.is_blacklist_shared,
            is_recent_bans_shared: self.is_recent_bans_shared,
        }
    }

    pub fn set_scope(&mut self, scope: DevScopeSettings) {
        self.is_blacklist_shared = scope.is_blacklist_shared;
        self.is_recent_bans_shared = scope.is_recent_bans_shared;
    }

    /// Partition of the active bot, if a bot is active and has written anything.
    fn active_partition(&self) -> Option<&BotPartition> {
        self.active_bot_id
            .as_ref()
            .and_then(|id| self.bot_data.get(id))
    }

    /// Partition of the active bot, created on first use as a copy of the global lists.
    fn active_partition_mut(&mut self) -> Option<&mut BotPartition> {
        let id = self.active_bot_id.clone()?;
        let (blacklist, recent_bans) = (&self.global_blacklist, &self.recent_bans);

        Some(self.bot_data.entry(id).or_insert_with(|| BotPartition {
            blacklist: blacklist.clone(),
            recent_bans: recent_bans.clone(),
        }))
    }

    /// The blacklist reads resolve to under the current scope.
    ///
    /// Shared mode, or no active bot, reads the global list; otherwise the active
    /// bot's partition. A bot without a partition yet would receive a copy of the
    /// global list on its first write, so it reads the global list until then.
    pub fn blacklist(&self) -> &[String] {
        if self.is_blacklist_shared {
            return &self.global_blacklist;
        }

        self.active_partition()
            .map(|p| p.blacklist.as_slice())
            .unwrap_or(&self.global_blacklist)
    }

    pub fn is_blacklisted(&self, user_id: &str) -> bool {
        self.blacklist().iter().any(|id| id == user_id)
    }

    /// Adds a user to the front of both the global and the active bot's blacklist.
    ///
    /// An ID already present is moved to the front rather than duplicated.
    pub fn add_to_blacklist(&mut self, user_id: &str) {
        push_front_unique(&mut self.global_blacklist, user_id);

        if let Some(partition) = self.active_partition_mut() {
            push_front_unique(&mut partition.blacklist, user_id);
        }
    }

    /// Removes a user from both the global and the active bot's blacklist.
    pub fn remove_from_blacklist(&mut self, user_id: &str) {
        self.global_blacklist.retain(|id| id != user_id);

        if let Some(partition) = self.active_partition_mut() {
            partition.blacklist.retain(|id| id != user_id);
        }
    }

    /// Ban history under the current scope, most recent first.
    pub fn recent_bans(&self) -> &[BanRecord] {
        if self.is_recent_bans_shared {
            return &self.recent_bans;
        }

        self.active_partition()
            .map(|p| p.recent_bans.as_slice())
            .unwrap_or(&self.recent_bans)
    }

    /// Prepends a record to the global and the active bot's history, each capped
    /// independently at `RECENT_BAN_LIMIT`.
    pub fn add_recent_ban(&mut self, record: BanRecord) {
        if let Some(partition) = self.active_partition_mut() {
            push_front_capped(&mut partition.recent_bans, record.clone());
        }

        push_front_capped(&mut self.recent_bans, record);
    }

    pub fn bypasses(&self, guild_id: &str) -> &[String] {
        self.server_bypasses
            .get(guild_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn has_bypass(&self, guild_id: &str, user_id: &str) -> bool {
        self.bypasses(guild_id).iter().any(|id| id == user_id)
    }

    /// Exempts a user in one guild.
    ///
    /// # Returns
    /// - `true` - The exemption is new
    /// - `false` - The user was already exempt
    pub fn add_bypass(&mut self, guild_id: &str, user_id: &str) -> bool {
        let users = self
            .server_bypasses
            .entry(guild_id.to_string())
            .or_default();

        if users.iter().any(|id| id == user_id) {
            return false;
        }

        users.push(user_id.to_string());
        true
    }

    pub fn active_bot(&self) -> Option<&BotAccount> {
        let active = self.active_bot_id.as_deref()?;
        self.bot_accounts.iter().find(|a| a.client_id == active)
    }

    /// Inserts or replaces a bot account by client ID.
    ///
    /// The first account registered while no bot is active becomes the active one.
    pub fn upsert_bot_account(&mut self, account: BotAccount) {
        if self.active_bot_id.is_none() {
            self.active_bot_id = Some(account.client_id.clone());
        }

        match self
            .bot_accounts
            .iter_mut()
            .find(|a| a.client_id == account.client_id)
        {
            Some(existing) => *existing = account,
            None => self.bot_accounts.push(account),
        }
    }

    /// Removes a bot account; its data partition is kept.
    ///
    /// # Returns
    /// - `Some(BotAccount)` - The removed account; `activeBotId` is cleared if it pointed at it
    /// - `None` - No account with that client ID
    pub fn remove_bot_account(&mut self, client_id: &str) -> Option<BotAccount> {
        let index = self
            .bot_accounts
            .iter()
            .position(|a| a.client_id == client_id)?;

        if self.active_bot_id.as_deref() == Some(client_id) {
            self.active_bot_id = None;
        }

        Some(self.bot_accounts.remove(index))
    }

    /// Marks a registered account as active.
    ///
    /// # Returns
    /// - `true` - The account exists and is now active
    /// - `false` - No account with that client ID; nothing changed
    pub fn set_active_bot(&mut self, client_id: &str) -> bool {
        if !self.bot_accounts.iter().any(|a| a.client_id == client_id) {
            return false;
        }

        self.active_bot_id = Some(client_id.to_string());
        true
    }

    /// Settings of a dashboard user; defaults when absent or not a settings object.
    pub fn user_settings(&self, user_id: &str) -> UserSettings {
        let Some(value) = self.extra.get(user_id) else {
            return UserSettings::default();
        };

        match serde_json::from_value(value.clone()) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Ignoring unreadable settings of user {}: {}", user_id, e);
                UserSettings::default()
            }
        }
    }

    pub fn set_user_settings(
        &mut self,
        user_id: &str,
        settings: &UserSettings,
    ) -> Result<(), serde_json::Error> {
        self.extra
            .insert(user_id.to_string(), serde_json::to_value(settings)?);
        Ok(())
    }
}

fn push_front_unique(list: &mut Vec<String>, user_id: &str) {
    list.retain(|id| id != user_id);
    list.insert(0, user_id.to_string());
}

fn push_front_capped(list: &mut Vec<BanRecord>, record: BanRecord) {
    list.insert(0, record);
    list.truncate(RECENT_BAN_LIMIT);
}
