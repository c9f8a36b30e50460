use super::*;
use crate::model::dev::UpdateDevScopeDto;

/// Tests that turning shared scope off exposes the bot's own copy.
///
/// After adding "222" in shared mode, disabling shared mode reads B's partition
/// ["222","111"], and later divergence of the global list does not leak into it.
///
/// Expected: B's copy unchanged, not emptied, independent of the global list
#[tokio::test]
async fn disabling_shared_reveals_bot_copy() -> Result<(), StoreError> {
    let test = TestBuilder::new()
        .with_global_blacklist(&["111"])
        .with_bot_blacklist("B", &["111"])
        .with_active_bot("B")
        .build()
        .unwrap();
    let store = SettingsStore::load(test.store_path())?;
    let repo = BlacklistRepository::new(&store);

    repo.add(222).await?;
    DevScopeRepository::new(&store)
        .update(UpdateDevScopeDto {
            is_blacklist_shared: Some(false),
            is_recent_bans_shared: None,
        })
        .await?;

    assert_eq!(repo.get().await, vec!["222", "111"]);

    store
        .mutate(|doc| doc.global_blacklist.insert(0, "999".to_string()))
        .await?;

    assert_eq!(repo.get().await, vec!["222", "111"]);
    assert!(!repo.contains(999).await);

    Ok(())
}

/// Tests reading in per-bot scope for a bot that never wrote anything.
///
/// The bot would be seeded from the global list on its first write, so reads see
/// that list until then.
///
/// Expected: the global list, and no partition created by the read
#[tokio::test]
async fn private_scope_without_partition_reads_global() -> Result<(), StoreError> {
    let test = TestBuilder::new()
        .with_global_blacklist(&["111"])
        .with_active_bot("B")
        .with_scope(false, true)
        .build()
        .unwrap();
    let store = SettingsStore::load(test.store_path())?;
    let repo = BlacklistRepository::new(&store);

    assert_eq!(repo.get().await, vec!["111"]);
    assert!(repo.contains(111).await);
    assert!(store.read(|doc| doc.bot_data.is_empty()).await);

    Ok(())
}

/// Tests that per-bot scope without an active bot falls back to the global list.
///
/// Expected: the global list
#[tokio::test]
async fn private_scope_without_active_bot_reads_global() -> Result<(), StoreError> {
    let test = TestBuilder::new()
        .with_global_blacklist(&["111"])
        .with_scope(false, false)
        .build()
        .unwrap();
    let store = SettingsStore::load(test.store_path())?;

    assert_eq!(BlacklistRepository::new(&store).get().await, vec!["111"]);
    assert!(BlacklistRepository::new(&store).contains(111).await);

    Ok(())
}
