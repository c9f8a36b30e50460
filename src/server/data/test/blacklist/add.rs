use super::*;

/// Tests the dual write of a blacklist addition.
///
/// With "111" listed, bot B active and shared scope, adding "222" puts it in front
/// of both the global list and B's partition, and the flushed file matches the cache.
///
/// Expected: global = ["222","111"], botData[B].blacklist = ["222","111"]
#[tokio::test]
async fn writes_global_and_active_partition() -> Result<(), StoreError> {
    let test = TestBuilder::new()
        .with_global_blacklist(&["111"])
        .with_bot_blacklist("B", &["111"])
        .with_active_bot("B")
        .build()
        .unwrap();
    let store = SettingsStore::load(test.store_path())?;

    let effective = BlacklistRepository::new(&store).add(222).await?;

    assert_eq!(effective, vec!["222", "111"]);
    let (global, partition) = store
        .read(|doc| (doc.global_blacklist.clone(), doc.bot_data["B"].blacklist.clone()))
        .await;
    assert_eq!(global, vec!["222", "111"]);
    assert_eq!(partition, vec!["222", "111"]);

    let on_disk = read_back(&store);
    assert_eq!(on_disk["globalBlacklist"], serde_json::json!(["222", "111"]));
    assert_eq!(
        on_disk["botData"]["B"]["blacklist"],
        serde_json::json!(["222", "111"])
    );

    Ok(())
}

/// Tests that a bot without any partition gets one on its first write.
///
/// Expected: partition created holding the new ID
#[tokio::test]
async fn creates_partition_for_active_bot() -> Result<(), StoreError> {
    let test = TestBuilder::new().with_active_bot("B").build().unwrap();
    let store = SettingsStore::load(test.store_path())?;

    BlacklistRepository::new(&store).add(333).await?;

    let partition = store.read(|doc| doc.bot_data.get("B").cloned()).await;
    assert_eq!(partition.unwrap().blacklist, vec!["333"]);

    Ok(())
}

/// Tests the first write of a bot that joined after the global list was populated.
///
/// With "111" listed globally and no partition for B, adding "222" seeds B from the
/// global list before writing, so switching to per-bot scope keeps "111" enforced.
///
/// Expected: botData[B].blacklist = ["222","111"], still read after disabling shared
#[tokio::test]
async fn seeds_new_partition_from_global() -> Result<(), StoreError> {
    let test = TestBuilder::new()
        .with_global_blacklist(&["111"])
        .with_active_bot("B")
        .build()
        .unwrap();
    let store = SettingsStore::load(test.store_path())?;
    let repo = BlacklistRepository::new(&store);

    repo.add(222).await?;
    store.mutate(|doc| doc.is_blacklist_shared = false).await?;

    let partition = store.read(|doc| doc.bot_data["B"].blacklist.clone()).await;
    assert_eq!(partition, vec!["222", "111"]);
    assert_eq!(repo.get().await, vec!["222", "111"]);
    assert!(repo.contains(111).await);

    Ok(())
}

/// Tests adding while no bot is active.
///
/// Expected: only the global list is written, no partition appears
#[tokio::test]
async fn writes_only_global_without_active_bot() -> Result<(), StoreError> {
    let test = TestBuilder::new().build().unwrap();
    let store = SettingsStore::load(test.store_path())?;

    let effective = BlacklistRepository::new(&store).add(444).await?;

    assert_eq!(effective, vec!["444"]);
    assert!(store.read(|doc| doc.bot_data.is_empty()).await);

    Ok(())
}

/// Tests re-adding an ID that is already listed.
///
/// Expected: the ID moves to the front without being duplicated
#[tokio::test]
async fn moves_existing_id_to_front() -> Result<(), StoreError> {
    let test = TestBuilder::new()
        .with_global_blacklist(&["111", "222", "333"])
        .build()
        .unwrap();
    let store = SettingsStore::load(test.store_path())?;

    let effective = BlacklistRepository::new(&store).add(333).await?;

    assert_eq!(effective, vec!["333", "111", "222"]);

    Ok(())
}
