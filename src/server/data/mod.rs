//! Settings store and repository layer for all persisted records.
//!
//! This module contains the JSON-file backed `SettingsStore` and repository structs that
//! expose typed operations over it, one per record family. Repositories never touch the
//! file directly; they run closures against the cached `StoreDocument` through
//! `SettingsStore::read` and `SettingsStore::mutate`, which keeps every flush on the
//! same write-temp-then-rename path.

pub mod blacklist;
pub mod bot_account;
pub mod bypass;
pub mod dev_scope;
pub mod document;
pub mod recent_ban;
pub mod store;
pub mod suspicious_bot;
pub mod user_settings;

pub use blacklist::BlacklistRepository;
pub use bot_account::BotAccountRepository;
pub use bypass::BypassRepository;
pub use dev_scope::DevScopeRepository;
pub use recent_ban::RecentBanRepository;
pub use store::SettingsStore;
pub use suspicious_bot::SuspiciousBotRepository;
pub use user_settings::UserSettingsRepository;

#[cfg(test)]
mod test;
