use super::*;

/// Tests removing the active account.
///
/// Expected: account removed, activeBotId cleared, data partition kept
#[tokio::test]
async fn removing_active_clears_selection() -> Result<(), StoreError> {
    let test = TestBuilder::new()
        .with_active_bot("A")
        .with_bot_blacklist("A", &["111"])
        .build()
        .unwrap();
    let store = SettingsStore::load(test.store_path())?;

    let removed = BotAccountRepository::new(&store).delete("A").await?;

    let (account, was_active) = removed.unwrap();
    assert_eq!(account.client_id, "A");
    assert!(was_active);
    let (active, partition) = store
        .read(|doc| (doc.active_bot_id.clone(), doc.bot_data.get("A").cloned()))
        .await;
    assert!(active.is_none());
    assert_eq!(partition.unwrap().blacklist, vec!["111"]);

    Ok(())
}

/// Tests removing an inactive account.
///
/// Expected: active selection untouched
#[tokio::test]
async fn removing_inactive_keeps_selection() -> Result<(), StoreError> {
    let test = TestBuilder::new()
        .with_active_bot("A")
        .with_bot_account("B")
        .build()
        .unwrap();
    let store = SettingsStore::load(test.store_path())?;
    let repo = BotAccountRepository::new(&store);

    let (_, was_active) = repo.delete("B").await?.unwrap();

    assert!(!was_active);
    assert_eq!(repo.get_all().await.1.as_deref(), Some("A"));

    Ok(())
}

/// Tests removing an unknown account.
///
/// Expected: Ok(None)
#[tokio::test]
async fn unknown_account_is_none() -> Result<(), StoreError> {
    let test = TestBuilder::new().build().unwrap();
    let store = SettingsStore::load(test.store_path())?;

    assert!(BotAccountRepository::new(&store).delete("X").await?.is_none());

    Ok(())
}
