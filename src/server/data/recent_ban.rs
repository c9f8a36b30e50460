use crate::server::{
    data::store::SettingsStore, error::store::StoreError, model::ban::BanRecord,
};

pub struct RecentBanRepository<'a> {
    store: &'a SettingsStore,
}

impl<'a> RecentBanRepository<'a> {
    pub fn new(store: &'a SettingsStore) -> Self {
        Self { store }
    }

    /// Gets the ban history under the current scope, most recent first.
    pub async fn get(&self) -> Vec<BanRecord> {
        self.store.read(|doc| doc.recent_bans().to_vec()).await
    }

    /// Appends a record to the global and the active bot's history.
    pub async fn add(&self, record: BanRecord) -> Result<(), StoreError> {
        self.store.mutate(|doc| doc.add_recent_ban(record)).await
    }
}
