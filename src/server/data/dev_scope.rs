use crate::{
    model::dev::UpdateDevScopeDto,
    server::{
        data::store::SettingsStore, error::store::StoreError,
        model::settings::DevScopeSettings,
    },
};

pub struct DevScopeRepository<'a> {
    store: &'a SettingsStore,
}

impl<'a> DevScopeRepository<'a> {
    pub fn new(store: &'a SettingsStore) -> Self {
        Self { store }
    }

    pub async fn get(&self) -> DevScopeSettings {
        self.store.read(|doc| doc.scope()).await
    }

    /// Applies a partial update of the scope flags.
    ///
    /// Only the flags change; no list is copied or cleared.
    pub async fn update(&self, update: UpdateDevScopeDto) -> Result<DevScopeSettings, StoreError> {
        self.store
            .mutate(|doc| {
                let mut scope = doc.scope();
                if let Some(shared) = update.is_blacklist_shared {
                    scope.is_blacklist_shared = shared;
                }
                if let Some(shared) = update.is_recent_bans_shared {
                    scope.is_recent_bans_shared = shared;
                }
                doc.set_scope(scope);
                scope
            })
            .await
    }
}
