use crate::server::{
    data::store::SettingsStore, error::store::StoreError, model::bot_account::BotAccount,
};

pub struct BotAccountRepository<'a> {
    store: &'a SettingsStore,
}

impl<'a> BotAccountRepository<'a> {
    pub fn new(store: &'a SettingsStore) -> Self {
        Self { store }
    }

    /// Gets all registered accounts together with the active client ID.
    pub async fn get_all(&self) -> (Vec<BotAccount>, Option<String>) {
        self.store
            .read(|doc| (doc.bot_accounts.clone(), doc.active_bot_id.clone()))
            .await
    }

    /// Gets the account the gateway session should run under.
    pub async fn get_active(&self) -> Option<BotAccount> {
        self.store.read(|doc| doc.active_bot().cloned()).await
    }

    pub async fn upsert(&self, account: BotAccount) -> Result<(), StoreError> {
        self.store
            .mutate(|doc| doc.upsert_bot_account(account))
            .await
    }

    /// Removes an account, clearing `activeBotId` when it pointed at it.
    ///
    /// # Returns
    /// - `Ok(Some((account, was_active)))` - The removed account
    /// - `Ok(None)` - No account with that client ID
    pub async fn delete(&self, client_id: &str) -> Result<Option<(BotAccount, bool)>, StoreError> {
        self.store
            .mutate(|doc| {
                let was_active = doc.active_bot_id.as_deref() == Some(client_id);
                doc.remove_bot_account(client_id)
                    .map(|account| (account, was_active))
            })
            .await
    }

    /// Marks an account active.
    ///
    /// # Returns
    /// - `Ok(true)` - The account exists and is now active
    /// - `Ok(false)` - Unknown client ID; nothing changed
    pub async fn set_active(&self, client_id: &str) -> Result<bool, StoreError> {
        self.store.mutate(|doc| doc.set_active_bot(client_id)).await
    }
}
