use super::*;

/// Tests switching to a registered account.
///
/// Expected: Ok(true) and the switch is persisted
#[tokio::test]
async fn switches_to_registered_account() -> Result<(), StoreError> {
    let test = TestBuilder::new()
        .with_active_bot("A")
        .with_bot_account("B")
        .build()
        .unwrap();
    let store = SettingsStore::load(test.store_path())?;

    assert!(BotAccountRepository::new(&store).set_active("B").await?);
    assert_eq!(read_back(&store)["activeBotId"], "B");

    Ok(())
}

/// Tests switching to an unknown account.
///
/// Expected: Ok(false), previous selection kept
#[tokio::test]
async fn rejects_unknown_account() -> Result<(), StoreError> {
    let test = TestBuilder::new().with_active_bot("A").build().unwrap();
    let store = SettingsStore::load(test.store_path())?;
    let repo = BotAccountRepository::new(&store);

    assert!(!repo.set_active("Z").await?);
    assert_eq!(repo.get_all().await.1.as_deref(), Some("A"));

    Ok(())
}
