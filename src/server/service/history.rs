//! Read side of the moderation records shown on the dashboard.

use crate::server::{
    data::{RecentBanRepository, SettingsStore, SuspiciousBotRepository},
    model::{ban::BanRecord, suspicious_bot::SuspiciousBot},
};

pub struct HistoryService<'a> {
    store: &'a SettingsStore,
}

impl<'a> HistoryService<'a> {
    pub fn new(store: &'a SettingsStore) -> Self {
        Self { store }
    }

    /// Ban history under the current scope, most recent first.
    pub async fn recent_bans(&self) -> Vec<BanRecord> {
        RecentBanRepository::new(self.store).get().await
    }

    /// Findings of the latest bot scan.
    pub async fn suspicious_bots(&self) -> Vec<SuspiciousBot> {
        SuspiciousBotRepository::new(self.store).get_all().await
    }
}
