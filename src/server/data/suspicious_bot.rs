use crate::server::{
    data::store::SettingsStore, error::store::StoreError, model::suspicious_bot::SuspiciousBot,
};

pub struct SuspiciousBotRepository<'a> {
    store: &'a SettingsStore,
}

impl<'a> SuspiciousBotRepository<'a> {
    pub fn new(store: &'a SettingsStore) -> Self {
        Self { store }
    }

    pub async fn get_all(&self) -> Vec<SuspiciousBot> {
        self.store.read(|doc| doc.suspicious_bots.clone()).await
    }

    /// Replaces the whole list with the result of a scan.
    pub async fn replace(&self, bots: Vec<SuspiciousBot>) -> Result<(), StoreError> {
        self.store
            .mutate(|doc| doc.suspicious_bots = bots)
            .await
    }
}
