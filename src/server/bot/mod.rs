//! Discord gateway session and moderation capabilities.
//!
//! The session is owned by `BotManager`, which starts it under the active bot
//! account, waits for Ready, and stops or switches it on request from the dashboard.
//! Gateway events are dispatched by `Handler` to the enforcement, history and bypass
//! services, which reach Discord only through the `ModerationGateway` trait.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Guild create events that fill the cache used for stats and scans
//! - `GUILD_MEMBERS` - Member join events (privileged intent)
//! - `GUILD_MODERATION` - Ban events recorded in the recent-ban history
//!
//! Note: `GUILD_MEMBERS` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod gateway;
pub mod handler;
pub mod manager;
