//! Discord moderation capabilities used by the monitor, the bypass workflow and the scanner.
//!
//! The services never talk to serenity directly. They receive a `ModerationGateway`,
//! which the live session implements over serenity's `Http` and `Cache` and tests
//! replace with a recording mock.

use std::collections::HashMap;
use std::sync::Arc;

use serenity::all::{
    ButtonStyle, Cache, CreateActionRow, CreateButton, CreateEmbed, CreateMessage, GuildId, Http,
    Member, Permissions, Role, RoleId, UserId, UserPublicFlags,
};
use serenity::async_trait;
use serenity::http::UserPagination;

use crate::server::model::{
    bypass::{BypassAction, BypassDecision, BypassNotice},
    moderation::{BotMemberSnapshot, GuildSummary, ResolvedUser},
};

#[cfg(test)]
pub mod mock;

/// Maximum page size of Discord's member listing endpoint.
const MEMBER_PAGE_SIZE: u64 = 1000;

/// Embed color of the bypass request message.
const NOTICE_COLOR: u32 = 0xe74c3c;

#[async_trait]
pub trait ModerationGateway: Send + Sync {
    /// Resolves the name and owner of a guild, or `None` when the session cannot see it.
    async fn guild_summary(&self, guild_id: u64) -> Option<GuildSummary>;

    async fn ban(&self, guild_id: u64, user_id: u64, reason: &str) -> Result<(), serenity::Error>;

    async fn unban(&self, guild_id: u64, user_id: u64) -> Result<(), serenity::Error>;

    /// Looks up the audit reason of an existing ban. Best-effort.
    async fn ban_reason(&self, guild_id: u64, user_id: u64) -> Option<String>;

    /// Sends the owner a direct message carrying the allow/deny buttons.
    async fn send_bypass_request(
        &self,
        owner_id: u64,
        notice: &BypassNotice,
    ) -> Result<(), serenity::Error>;

    /// IDs of every guild the session is a member of.
    async fn guild_ids(&self) -> Vec<u64>;

    /// Enumerates the bot members of a guild with their verification and admin status.
    async fn bot_members(&self, guild_id: u64) -> Result<Vec<BotMemberSnapshot>, serenity::Error>;

    async fn fetch_user(&self, user_id: u64) -> Result<ResolvedUser, serenity::Error>;
}

/// `ModerationGateway` backed by a running serenity client.
#[derive(Clone)]
pub struct SerenityGateway {
    http: Arc<Http>,
    cache: Arc<Cache>,
}

impl SerenityGateway {
    pub fn new(http: Arc<Http>, cache: Arc<Cache>) -> Self {
        Self { http, cache }
    }

    /// Owner and role table of a guild, from the cache when available.
    async fn guild_roles(
        &self,
        guild_id: GuildId,
    ) -> Result<(u64, HashMap<RoleId, Role>), serenity::Error> {
        if let Some(guild) = self.cache.guild(guild_id) {
            return Ok((guild.owner_id.get(), guild.roles.clone()));
        }

        let guild = self.http.get_guild(guild_id).await?;
        Ok((guild.owner_id.get(), guild.roles))
    }
}

#[async_trait]
impl ModerationGateway for SerenityGateway {
    async fn guild_summary(&self, guild_id: u64) -> Option<GuildSummary> {
        let id = GuildId::new(guild_id);

        if let Some(guild) = self.cache.guild(id) {
            return Some(GuildSummary {
                id: guild_id,
                name: guild.name.clone(),
                owner_id: guild.owner_id.get(),
            });
        }

        match self.http.get_guild(id).await {
            Ok(guild) => Some(GuildSummary {
                id: guild_id,
                name: guild.name,
                owner_id: guild.owner_id.get(),
            }),
            Err(e) => {
                tracing::warn!("Failed to resolve guild {}: {}", guild_id, e);
                None
            }
        }
    }

    async fn ban(&self, guild_id: u64, user_id: u64, reason: &str) -> Result<(), serenity::Error> {
        self.http
            .ban_user(GuildId::new(guild_id), UserId::new(user_id), 0, Some(reason))
            .await
    }

    async fn unban(&self, guild_id: u64, user_id: u64) -> Result<(), serenity::Error> {
        self.http
            .remove_ban(GuildId::new(guild_id), UserId::new(user_id), None)
            .await
    }

    async fn ban_reason(&self, guild_id: u64, user_id: u64) -> Option<String> {
        let bans = self
            .http
            .get_bans(GuildId::new(guild_id), ban_lookup_cursor(user_id), Some(1))
            .await;

        match bans {
            Ok(bans) => bans
                .into_iter()
                .find(|ban| ban.user.id.get() == user_id)
                .and_then(|ban| ban.reason),
            Err(e) => {
                tracing::debug!("Failed to fetch bans of guild {}: {}", guild_id, e);
                None
            }
        }
    }

    async fn send_bypass_request(
        &self,
        owner_id: u64,
        notice: &BypassNotice,
    ) -> Result<(), serenity::Error> {
        let channel = UserId::new(owner_id)
            .create_dm_channel(self.http.as_ref())
            .await?;

        channel
            .id
            .send_message(self.http.as_ref(), build_bypass_request(notice))
            .await?;

        Ok(())
    }

    async fn guild_ids(&self) -> Vec<u64> {
        self.cache.guilds().into_iter().map(GuildId::get).collect()
    }

    async fn bot_members(&self, guild_id: u64) -> Result<Vec<BotMemberSnapshot>, serenity::Error> {
        let id = GuildId::new(guild_id);
        let (owner_id, roles) = self.guild_roles(id).await?;

        let mut snapshots = Vec::new();
        let mut after = None;

        loop {
            let page = self
                .http
                .get_guild_members(id, Some(MEMBER_PAGE_SIZE), after)
                .await?;
            let page_len = page.len() as u64;
            after = page.last().map(|m| m.user.id.get());

            snapshots.extend(
                page.iter()
                    .filter_map(|member| snapshot_bot_member(member, guild_id, owner_id, &roles)),
            );

            if page_len < MEMBER_PAGE_SIZE {
                break;
            }
        }

        Ok(snapshots)
    }

    async fn fetch_user(&self, user_id: u64) -> Result<ResolvedUser, serenity::Error> {
        let user = self.http.get_user(UserId::new(user_id)).await?;

        Ok(ResolvedUser {
            id: user.id.get(),
            avatar: user.avatar_url(),
            global_name: user.global_name,
            username: user.name,
        })
    }
}

/// Builds the direct message asking a guild owner to allow or deny a banned user.
pub fn build_bypass_request(notice: &BypassNotice) -> CreateMessage {
    let embed = CreateEmbed::new()
        .title("Blacklisted user banned")
        .description(format!(
            "A user on the blacklist tried to join **{}** and was banned automatically.",
            notice.guild_name
        ))
        .field("User", &notice.user_display_name, true)
        .field("User ID", notice.user_id.to_string(), true)
        .field("Server", &notice.guild_name, false)
        .footer(serenity::all::CreateEmbedFooter::new(
            "Allow lifts the ban and exempts the user in this server.",
        ))
        .color(NOTICE_COLOR);

    let allow = BypassAction::new(BypassDecision::Allow, notice.guild_id, notice.user_id);
    let deny = BypassAction::new(BypassDecision::Deny, notice.guild_id, notice.user_id);

    let buttons = CreateActionRow::Buttons(vec![
        CreateButton::new(allow.custom_id())
            .label("Allow")
            .style(ButtonStyle::Success),
        CreateButton::new(deny.custom_id())
            .label("Deny")
            .style(ButtonStyle::Danger),
    ]);

    CreateMessage::new().embed(embed).components(vec![buttons])
}

/// Cursor positioning a one-entry ban page on `user_id`.
///
/// Bans are listed in ascending user ID order, so the page after `user_id - 1` starts
/// with that user's ban when one exists, however long the ban list is.
pub fn ban_lookup_cursor(user_id: u64) -> Option<UserPagination> {
    (user_id > 1).then(|| UserPagination::After(UserId::new(user_id - 1)))
}

/// Converts a member into a scan snapshot, or `None` for human members.
pub fn snapshot_bot_member(
    member: &Member,
    guild_id: u64,
    owner_id: u64,
    roles: &HashMap<RoleId, Role>,
) -> Option<BotMemberSnapshot> {
    let user = &member.user;
    if !user.bot {
        return None;
    }

    let verified = user
        .public_flags
        .is_some_and(|flags| flags.contains(UserPublicFlags::VERIFIED_BOT));

    Some(BotMemberSnapshot {
        id: user.id.get(),
        username: user.name.clone(),
        avatar: user.avatar_url(),
        verified,
        administrator: holds_administrator(member, guild_id, owner_id, roles),
    })
}

/// Whether a member has `ADMINISTRATOR` through ownership, `@everyone` or any assigned role.
///
/// The `@everyone` role shares its ID with the guild.
pub fn holds_administrator(
    member: &Member,
    guild_id: u64,
    owner_id: u64,
    roles: &HashMap<RoleId, Role>,
) -> bool {
    if member.user.id.get() == owner_id {
        return true;
    }

    std::iter::once(RoleId::new(guild_id))
        .chain(member.roles.iter().copied())
        .filter_map(|role_id| roles.get(&role_id))
        .any(|role| role.permissions.contains(Permissions::ADMINISTRATOR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::serenity::{create_test_member, create_test_role, create_test_user};

    const GUILD_ID: u64 = 900;
    const OWNER_ID: u64 = 1;

    fn roles(list: Vec<Role>) -> HashMap<RoleId, Role> {
        list.into_iter().map(|role| (role.id, role)).collect()
    }

    /// Tests administrator detection through an assigned role.
    ///
    /// Expected: true for the admin role, false for a plain role
    #[test]
    fn detects_admin_role() {
        let roles = roles(vec![
            create_test_role(GUILD_ID, "@everyone", 0, 0),
            create_test_role(10, "Admin", 0x8, 5),
            create_test_role(11, "Member", 0x400, 1),
        ]);
        let admin = create_test_member(GUILD_ID, create_test_user(2, "a", true, false), &[10]);
        let plain = create_test_member(GUILD_ID, create_test_user(3, "b", true, false), &[11]);

        assert!(holds_administrator(&admin, GUILD_ID, OWNER_ID, &roles));
        assert!(!holds_administrator(&plain, GUILD_ID, OWNER_ID, &roles));
    }

    /// Tests administrator detection through `@everyone` and ownership.
    ///
    /// Expected: true for both
    #[test]
    fn detects_everyone_and_owner() {
        let everyone_admin = roles(vec![create_test_role(GUILD_ID, "@everyone", 0x8, 0)]);
        let no_roles = create_test_member(GUILD_ID, create_test_user(2, "a", true, false), &[]);
        let owner = create_test_member(GUILD_ID, create_test_user(OWNER_ID, "o", false, false), &[]);

        assert!(holds_administrator(&no_roles, GUILD_ID, OWNER_ID, &everyone_admin));
        assert!(holds_administrator(&owner, GUILD_ID, OWNER_ID, &HashMap::new()));
    }

    /// Tests snapshot conversion.
    ///
    /// Expected: humans skipped, verified flag carried over
    #[test]
    fn snapshots_only_bots() {
        let roles = roles(vec![create_test_role(10, "Admin", 0x8, 5)]);
        let human = create_test_member(GUILD_ID, create_test_user(2, "h", false, false), &[10]);
        let verified = create_test_member(GUILD_ID, create_test_user(3, "v", true, true), &[10]);

        assert!(snapshot_bot_member(&human, GUILD_ID, OWNER_ID, &roles).is_none());

        let snapshot = snapshot_bot_member(&verified, GUILD_ID, OWNER_ID, &roles).unwrap();
        assert_eq!(snapshot.id, 3);
        assert!(snapshot.verified);
        assert!(snapshot.administrator);
    }

    /// Tests positioning of the ban lookup page.
    ///
    /// Expected: the page starts just before the user; the lowest possible ID needs no cursor
    #[test]
    fn ban_lookup_starts_before_user() {
        assert!(matches!(
            ban_lookup_cursor(111),
            Some(UserPagination::After(id)) if id.get() == 110
        ));
        assert!(ban_lookup_cursor(1).is_none());
    }
}
