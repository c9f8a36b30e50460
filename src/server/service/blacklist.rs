//! Dashboard view of the blacklist.

use crate::{
    model::blacklist::BlacklistEntryDto,
    server::{
        bot::gateway::ModerationGateway,
        data::{BlacklistRepository, SettingsStore},
        error::{internal::InternalError, AppError},
        util::parse::parse_snowflake,
    },
};

pub struct BlacklistService<'a> {
    store: &'a SettingsStore,
}

impl<'a> BlacklistService<'a> {
    pub fn new(store: &'a SettingsStore) -> Self {
        Self { store }
    }

    /// Gets the effective blacklist with each ID resolved to a profile.
    ///
    /// IDs the session cannot resolve, or every ID when no session is running, are
    /// returned with only the ID set.
    pub async fn get_resolved(
        &self,
        gateway: Option<&dyn ModerationGateway>,
    ) -> Vec<BlacklistEntryDto> {
        let ids = BlacklistRepository::new(self.store).get().await;
        resolve_entries(ids, gateway).await
    }

    /// Adds an ID to the blacklist and returns the resolved list.
    ///
    /// # Returns
    /// - `Ok(Vec<BlacklistEntryDto>)` - The effective blacklist after the write
    /// - `Err(AppError::BadRequest)` - The ID is not a Discord snowflake
    /// - `Err(AppError::StoreErr)` - The document could not be persisted
    pub async fn add(
        &self,
        user_id: &str,
        gateway: Option<&dyn ModerationGateway>,
    ) -> Result<Vec<BlacklistEntryDto>, AppError> {
        let user_id = parse_snowflake(user_id)?;
        let ids = BlacklistRepository::new(self.store).add(user_id).await?;

        tracing::info!("Added {} to the blacklist", user_id);

        Ok(resolve_entries(ids, gateway).await)
    }

    /// Removes an ID from the blacklist and returns the resolved list.
    pub async fn remove(
        &self,
        user_id: u64,
        gateway: Option<&dyn ModerationGateway>,
    ) -> Result<Vec<BlacklistEntryDto>, AppError> {
        let ids = BlacklistRepository::new(self.store).remove(user_id).await?;

        tracing::info!("Removed {} from the blacklist", user_id);

        Ok(resolve_entries(ids, gateway).await)
    }
}

async fn resolve_entries(
    ids: Vec<String>,
    gateway: Option<&dyn ModerationGateway>,
) -> Vec<BlacklistEntryDto> {
    let Some(gateway) = gateway else {
        return ids.into_iter().map(BlacklistEntryDto::unresolved).collect();
    };

    let mut entries = Vec::with_capacity(ids.len());
    for id in ids {
        entries.push(resolve_entry(gateway, id).await);
    }
    entries
}

async fn resolve_entry(gateway: &dyn ModerationGateway, id: String) -> BlacklistEntryDto {
    let user_id = match id.parse::<u64>() {
        Ok(user_id) => user_id,
        Err(source) => {
            let e = InternalError::ParseStringId {
                value: id.clone(),
                source,
            };
            tracing::warn!("{}", e);
            return BlacklistEntryDto::unresolved(id);
        }
    };

    match gateway.fetch_user(user_id).await {
        Ok(user) => BlacklistEntryDto {
            id,
            username: Some(user.username),
            global_name: user.global_name,
            avatar: user.avatar,
        },
        Err(e) => {
            tracing::debug!("Could not resolve blacklisted user {}: {}", id, e);
            BlacklistEntryDto::unresolved(id)
        }
    }
}
