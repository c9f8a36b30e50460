//! Bypass approval incidents and the button payloads that resolve them.

use std::fmt;

const CUSTOM_ID_PREFIX: &str = "bypass";

/// The owner's answer to a bypass request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BypassDecision {
    Allow,
    Deny,
}

impl BypassDecision {
    fn as_str(self) -> &'static str {
        match self {
            Self::Allow => "allow",
            Self::Deny => "deny",
        }
    }
}

/// A click on one of the two buttons attached to a bypass request.
///
/// Encoded into the button's custom ID as `bypass:<decision>:<guild_id>:<user_id>` so
/// the response can be handled without any server-side lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BypassAction {
    pub decision: BypassDecision,
    pub guild_id: u64,
    pub user_id: u64,
}

impl BypassAction {
    pub fn new(decision: BypassDecision, guild_id: u64, user_id: u64) -> Self {
        Self {
            decision,
            guild_id,
            user_id,
        }
    }

    pub fn custom_id(&self) -> String {
        self.to_string()
    }

    /// Parses a component custom ID.
    ///
    /// # Returns
    /// - `Some(BypassAction)` - The ID was produced by `custom_id`
    /// - `None` - The ID belongs to some other component or is malformed
    pub fn parse(custom_id: &str) -> Option<Self> {
        let mut parts = custom_id.split(':');

        if parts.next()? != CUSTOM_ID_PREFIX {
            return None;
        }

        let decision = match parts.next()? {
            "allow" => BypassDecision::Allow,
            "deny" => BypassDecision::Deny,
            _ => return None,
        };
        let guild_id = parts.next()?.parse().ok()?;
        let user_id = parts.next()?.parse().ok()?;

        if parts.next().is_some() {
            return None;
        }

        Some(Self::new(decision, guild_id, user_id))
    }
}

impl fmt::Display for BypassAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}",
            CUSTOM_ID_PREFIX,
            self.decision.as_str(),
            self.guild_id,
            self.user_id
        )
    }
}

/// What a bypass response ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BypassOutcome {
    /// The user was added to the guild's bypass list.
    Approved { guild_name: String },
    /// The owner declined; nothing changed.
    Denied { guild_name: String },
    /// The incident was already resolved by an earlier click.
    AlreadyResolved,
    /// The session could not resolve the guild; nothing changed.
    GuildUnavailable,
}

/// Content of the direct message sent to a guild owner after an automatic ban.
#[derive(Debug, Clone, PartialEq)]
pub struct BypassNotice {
    pub guild_id: u64,
    pub guild_name: String,
    pub user_id: u64,
    pub user_display_name: String,
}
