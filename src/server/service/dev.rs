//! Bot account management and developer scope toggles.

use serenity::http::Http;

use crate::{
    model::{
        bot::{AddBotAccountDto, BotAccountDto},
        dev::UpdateDevScopeDto,
    },
    server::{
        bot::manager::BotManager,
        data::{BotAccountRepository, DevScopeRepository, SettingsStore},
        error::AppError,
        model::{bot_account::BotAccount, settings::DevScopeSettings},
    },
};

pub struct DevService<'a> {
    store: &'a SettingsStore,
    bot: &'a BotManager,
}

impl<'a> DevService<'a> {
    pub fn new(store: &'a SettingsStore, bot: &'a BotManager) -> Self {
        Self { store, bot }
    }

    /// Lists registered bot accounts without their credentials.
    pub async fn list_bots(&self) -> Vec<BotAccountDto> {
        let (accounts, active) = BotAccountRepository::new(self.store).get_all().await;

        accounts
            .into_iter()
            .map(|account| account.into_dto(active.as_deref()))
            .collect()
    }

    /// Verifies a bot token with Discord and registers the account.
    ///
    /// The bot's own user fills in the display name and avatar, and its ID is used as
    /// client ID when none is given. The first account registered becomes active.
    ///
    /// # Returns
    /// - `Ok(Vec<BotAccountDto>)` - The account list after registration
    /// - `Err(AppError::BadRequest)` - Empty token or Discord rejected it
    /// - `Err(AppError::StoreErr)` - The document could not be persisted
    pub async fn register_bot(
        &self,
        payload: AddBotAccountDto,
    ) -> Result<Vec<BotAccountDto>, AppError> {
        let token = payload.token.trim().to_string();
        if token.is_empty() {
            return Err(AppError::BadRequest("A bot token is required".to_string()));
        }

        let identity = verify_bot_token(&token).await?;

        let account = BotAccount {
            client_id: payload
                .client_id
                .filter(|id| !id.trim().is_empty())
                .unwrap_or(identity.client_id),
            token,
            secret_id: payload.secret_id.unwrap_or_default(),
            display_name: identity.display_name,
            avatar: identity.avatar,
        };

        self.save_bot(account).await
    }

    /// Stores an already verified account.
    pub async fn save_bot(&self, account: BotAccount) -> Result<Vec<BotAccountDto>, AppError> {
        tracing::info!(
            "Registered bot account {} ({})",
            account.display_name,
            account.client_id
        );

        BotAccountRepository::new(self.store).upsert(account).await?;

        Ok(self.list_bots().await)
    }

    /// Removes an account. Removing the active one stops the session; its data is kept.
    ///
    /// # Returns
    /// - `Ok(Vec<BotAccountDto>)` - The remaining accounts
    /// - `Err(AppError::NotFound)` - No account with that client ID
    pub async fn remove_bot(&self, client_id: &str) -> Result<Vec<BotAccountDto>, AppError> {
        let Some((account, was_active)) =
            BotAccountRepository::new(self.store).delete(client_id).await?
        else {
            return Err(AppError::NotFound(format!(
                "Bot account {} not found",
                client_id
            )));
        };

        tracing::info!("Removed bot account {}", account.client_id);

        if was_active {
            self.bot.stop().await;
        }

        Ok(self.list_bots().await)
    }

    /// Makes an account active and restarts the session under it.
    ///
    /// # Returns
    /// - `Ok(true)` - The new session became ready
    /// - `Ok(false)` - The switch was stored but the session did not start
    /// - `Err(AppError::NotFound)` - No account with that client ID
    pub async fn switch_bot(&self, client_id: &str) -> Result<bool, AppError> {
        if !BotAccountRepository::new(self.store)
            .set_active(client_id)
            .await?
        {
            return Err(AppError::NotFound(format!(
                "Bot account {} not found",
                client_id
            )));
        }

        tracing::info!("Switching bot session to {}", client_id);

        Ok(self.bot.restart().await)
    }

    pub async fn get_scope(&self) -> DevScopeSettings {
        DevScopeRepository::new(self.store).get().await
    }

    pub async fn update_scope(
        &self,
        update: UpdateDevScopeDto,
    ) -> Result<DevScopeSettings, AppError> {
        let scope = DevScopeRepository::new(self.store).update(update).await?;

        tracing::info!(
            "Scope changed: blacklist shared = {}, recent bans shared = {}",
            scope.is_blacklist_shared,
            scope.is_recent_bans_shared
        );

        Ok(scope)
    }
}

/// Identity of a bot as reported by Discord for its own token.
pub struct BotIdentity {
    pub client_id: String,
    pub display_name: String,
    pub avatar: Option<String>,
}

/// Checks a bot token by fetching the bot's own user.
///
/// # Returns
/// - `Ok(BotIdentity)` - The token is valid
/// - `Err(AppError::BadRequest)` - Discord rejected the token
pub async fn verify_bot_token(token: &str) -> Result<BotIdentity, AppError> {
    let user = Http::new(token).get_current_user().await.map_err(|e| {
        tracing::debug!("Bot token verification failed: {}", e);
        AppError::BadRequest("Discord rejected the bot token".to_string())
    })?;

    Ok(BotIdentity {
        client_id: user.id.to_string(),
        display_name: user.global_name.clone().unwrap_or_else(|| user.name.clone()),
        avatar: user.avatar_url(),
    })
}
