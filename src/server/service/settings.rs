use serde_json::Value;

use crate::server::{
    data::{SettingsStore, UserSettingsRepository},
    error::AppError,
    model::settings::UserSettings,
};

/// Keys that belong to bot account management and are never accepted as user settings.
const STRIPPED_KEYS: [&str; 5] = ["botAccounts", "activeBotId", "clientId", "token", "secretId"];

pub struct SettingsService<'a> {
    store: &'a SettingsStore,
}

impl<'a> SettingsService<'a> {
    pub fn new(store: &'a SettingsStore) -> Self {
        Self { store }
    }

    pub async fn get(&self, user_id: u64) -> UserSettings {
        UserSettingsRepository::new(self.store).get(user_id).await
    }

    /// Merges a partial settings object onto the user's stored settings.
    ///
    /// Bot account fields are stripped first, so the settings endpoint can never
    /// change credentials. Unknown keys are dropped.
    ///
    /// # Returns
    /// - `Ok(UserSettings)` - The saved settings
    /// - `Err(AppError::BadRequest)` - The body is not an object or a field has the wrong type
    /// - `Err(AppError::StoreErr)` - The document could not be persisted
    pub async fn update(&self, user_id: u64, patch: Value) -> Result<UserSettings, AppError> {
        let Value::Object(mut patch) = patch else {
            return Err(AppError::BadRequest(
                "Settings must be a JSON object".to_string(),
            ));
        };

        for key in STRIPPED_KEYS {
            patch.remove(key);
        }

        let repo = UserSettingsRepository::new(self.store);
        let mut merged = serde_json::to_value(repo.get(user_id).await)
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        if let Value::Object(current) = &mut merged {
            current.extend(patch);
        }

        let settings: UserSettings = serde_json::from_value(merged)
            .map_err(|e| AppError::BadRequest(format!("Invalid settings: {}", e)))?;

        repo.save(user_id, settings.clone()).await?;

        Ok(settings)
    }
}
