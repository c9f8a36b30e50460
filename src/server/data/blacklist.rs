//! Blacklist repository.
//!
//! Writes go to both the global list and the active bot's partition; reads resolve to
//! one of them according to `isBlacklistShared`. See `document` for the rules.

use crate::server::{data::store::SettingsStore, error::store::StoreError};

pub struct BlacklistRepository<'a> {
    store: &'a SettingsStore,
}

impl<'a> BlacklistRepository<'a> {
    pub fn new(store: &'a SettingsStore) -> Self {
        Self { store }
    }

    /// Gets the effective blacklist, most recently added first.
    pub async fn get(&self) -> Vec<String> {
        self.store.read(|doc| doc.blacklist().to_vec()).await
    }

    pub async fn contains(&self, user_id: u64) -> bool {
        let user_id = user_id.to_string();
        self.store.read(|doc| doc.is_blacklisted(&user_id)).await
    }

    /// Adds a user to the global and the active bot's blacklist.
    ///
    /// # Returns
    /// - `Ok(Vec<String>)` - The effective blacklist after the write
    /// - `Err(StoreError)` - Flushing the document failed
    pub async fn add(&self, user_id: u64) -> Result<Vec<String>, StoreError> {
        let user_id = user_id.to_string();
        self.store
            .mutate(|doc| {
                doc.add_to_blacklist(&user_id);
                doc.blacklist().to_vec()
            })
            .await
    }

    /// Removes a user from the global and the active bot's blacklist.
    ///
    /// Removing an ID that is not listed is not an error.
    pub async fn remove(&self, user_id: u64) -> Result<Vec<String>, StoreError> {
        let user_id = user_id.to_string();
        self.store
            .mutate(|doc| {
                doc.remove_from_blacklist(&user_id);
                doc.blacklist().to_vec()
            })
            .await
    }
}
