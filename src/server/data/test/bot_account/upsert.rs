use super::*;

/// Tests that the first account registered becomes active.
///
/// Expected: activeBotId set to the new account, later accounts leave it unchanged
#[tokio::test]
async fn first_account_becomes_active() -> Result<(), StoreError> {
    let test = TestBuilder::new().build().unwrap();
    let store = SettingsStore::load(test.store_path())?;
    let repo = BotAccountRepository::new(&store);

    repo.upsert(account("A")).await?;
    repo.upsert(account("B")).await?;

    let (accounts, active) = repo.get_all().await;
    assert_eq!(accounts.len(), 2);
    assert_eq!(active.as_deref(), Some("A"));
    assert_eq!(repo.get_active().await.unwrap().client_id, "A");

    Ok(())
}

/// Tests re-registering an existing client ID.
///
/// Expected: the account is replaced in place
#[tokio::test]
async fn replaces_existing_account() -> Result<(), StoreError> {
    let test = TestBuilder::new().with_active_bot("A").build().unwrap();
    let store = SettingsStore::load(test.store_path())?;
    let repo = BotAccountRepository::new(&store);

    let mut renamed = account("A");
    renamed.display_name = "Renamed".to_string();
    repo.upsert(renamed).await?;

    let (accounts, _) = repo.get_all().await;
    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0].display_name, "Renamed");

    Ok(())
}
