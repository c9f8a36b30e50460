use crate::server::{
    data::{
        BlacklistRepository, BotAccountRepository, BypassRepository, DevScopeRepository,
        RecentBanRepository, SettingsStore, SuspiciousBotRepository, UserSettingsRepository,
    },
    error::store::StoreError,
};
use test_utils::builder::TestBuilder;

mod blacklist;
mod bot_account;
mod dev_scope;
mod recent_ban;
mod store;

/// Reads the settings file back from disk, bypassing the cache.
fn read_back(store: &SettingsStore) -> serde_json::Value {
    let contents = std::fs::read(store.path()).unwrap();
    serde_json::from_slice(&contents).unwrap()
}
