//! Values exchanged with the Discord moderation capabilities.

/// Name and owner of a guild the session can see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildSummary {
    pub id: u64,
    pub name: String,
    pub owner_id: u64,
}

/// A bot-flagged member as seen by the suspicious-bot scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotMemberSnapshot {
    pub id: u64,
    pub username: String,
    pub avatar: Option<String>,
    /// Carries the `VERIFIED_BOT` public flag.
    pub verified: bool,
    /// Holds `ADMINISTRATOR` through ownership or any of its roles.
    pub administrator: bool,
}

/// Public profile of a user looked up through the bot session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedUser {
    pub id: u64,
    pub username: String,
    pub global_name: Option<String>,
    pub avatar: Option<String>,
}

/// A member joining a guild, as handed to the membership monitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberJoin {
    pub guild_id: u64,
    pub user_id: u64,
    pub display_name: String,
}

/// Result of evaluating one join event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JoinOutcome {
    /// The user is not on the effective blacklist.
    Allowed,
    /// Blacklisted, but exempt in this guild.
    Bypassed,
    /// Banned; `owner_notified` tells whether the bypass request was delivered.
    Banned { owner_notified: bool },
    /// Blacklisted, but the ban call failed. The join is left unresolved.
    BanFailed,
}
