use crate::server::{data::store::SettingsStore, error::store::StoreError};

pub struct BypassRepository<'a> {
    store: &'a SettingsStore,
}

impl<'a> BypassRepository<'a> {
    pub fn new(store: &'a SettingsStore) -> Self {
        Self { store }
    }

    /// Gets the users exempt from enforcement in a guild.
    pub async fn get_by_guild(&self, guild_id: u64) -> Vec<String> {
        let guild_id = guild_id.to_string();
        self.store.read(|doc| doc.bypasses(&guild_id).to_vec()).await
    }

    pub async fn contains(&self, guild_id: u64, user_id: u64) -> bool {
        let (guild_id, user_id) = (guild_id.to_string(), user_id.to_string());
        self.store
            .read(|doc| doc.has_bypass(&guild_id, &user_id))
            .await
    }

    /// Exempts a user in one guild.
    ///
    /// # Returns
    /// - `Ok(true)` - New exemption stored
    /// - `Ok(false)` - Already exempt; the document is still flushed
    /// - `Err(StoreError)` - Flushing the document failed
    pub async fn add(&self, guild_id: u64, user_id: u64) -> Result<bool, StoreError> {
        let (guild_id, user_id) = (guild_id.to_string(), user_id.to_string());
        self.store
            .mutate(|doc| doc.add_bypass(&guild_id, &user_id))
            .await
    }
}
