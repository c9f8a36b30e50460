use super::*;

/// Tests that add followed by remove leaves neither partition holding the ID.
///
/// Expected: the ID is absent from the global list and the bot partition
#[tokio::test]
async fn add_then_remove_clears_both_partitions() -> Result<(), StoreError> {
    let test = TestBuilder::new()
        .with_global_blacklist(&["111"])
        .with_active_bot("B")
        .build()
        .unwrap();
    let store = SettingsStore::load(test.store_path())?;
    let repo = BlacklistRepository::new(&store);

    repo.add(555).await?;
    let effective = repo.remove(555).await?;

    assert_eq!(effective, vec!["111"]);
    let (global, partition) = store
        .read(|doc| (doc.global_blacklist.clone(), doc.bot_data["B"].blacklist.clone()))
        .await;
    assert!(!global.contains(&"555".to_string()));
    assert!(!partition.contains(&"555".to_string()));

    Ok(())
}

/// Tests that removal reaches the global list while reads come from the bot.
///
/// Expected: the ID is gone from both lists in per-bot scope
#[tokio::test]
async fn removes_from_both_in_private_scope() -> Result<(), StoreError> {
    let test = TestBuilder::new()
        .with_global_blacklist(&["111", "222"])
        .with_bot_blacklist("B", &["222"])
        .with_active_bot("B")
        .with_scope(false, true)
        .build()
        .unwrap();
    let store = SettingsStore::load(test.store_path())?;

    let effective = BlacklistRepository::new(&store).remove(222).await?;

    assert!(effective.is_empty());
    assert_eq!(
        store.read(|doc| doc.global_blacklist.clone()).await,
        vec!["111"]
    );

    Ok(())
}

/// Tests removing an ID that is not listed.
///
/// Expected: Ok with the list unchanged
#[tokio::test]
async fn ignores_unknown_id() -> Result<(), StoreError> {
    let test = TestBuilder::new()
        .with_global_blacklist(&["111"])
        .build()
        .unwrap();
    let store = SettingsStore::load(test.store_path())?;

    let effective = BlacklistRepository::new(&store).remove(999).await?;

    assert_eq!(effective, vec!["111"]);

    Ok(())
}
