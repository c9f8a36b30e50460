use crate::server::{
    data::store::SettingsStore, error::store::StoreError, model::settings::UserSettings,
};

pub struct UserSettingsRepository<'a> {
    store: &'a SettingsStore,
}

impl<'a> UserSettingsRepository<'a> {
    pub fn new(store: &'a SettingsStore) -> Self {
        Self { store }
    }

    /// Gets a user's settings, falling back to defaults for unknown users.
    pub async fn get(&self, user_id: u64) -> UserSettings {
        let user_id = user_id.to_string();
        self.store.read(|doc| doc.user_settings(&user_id)).await
    }

    pub async fn save(&self, user_id: u64, settings: UserSettings) -> Result<(), StoreError> {
        self.store
            .mutate(|doc| doc.set_user_settings(&user_id.to_string(), &settings))
            .await?
            .map_err(StoreError::Serialize)
    }
}
