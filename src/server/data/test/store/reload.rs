use super::*;

/// Tests that a reload picks up changes made to the file externally.
///
/// Expected: cache reflects the new file contents
#[tokio::test]
async fn picks_up_external_changes() -> Result<(), StoreError> {
    let test = TestBuilder::new()
        .with_global_blacklist(&["1"])
        .build()
        .unwrap();
    let store = SettingsStore::load(test.store_path())?;

    std::fs::write(
        test.store_path(),
        serde_json::to_vec(&serde_json::json!({ "globalBlacklist": ["2", "1"] })).unwrap(),
    )
    .unwrap();
    store.reload().await?;

    assert_eq!(BlacklistRepository::new(&store).get().await, vec!["2", "1"]);

    Ok(())
}

/// Tests that a failed reload keeps the last good cache.
///
/// Expected: Err(StoreError::Parse), cached blacklist unchanged
#[tokio::test]
async fn failure_keeps_cache() -> Result<(), StoreError> {
    let test = TestBuilder::new()
        .with_global_blacklist(&["1"])
        .build()
        .unwrap();
    let store = SettingsStore::load(test.store_path())?;

    std::fs::write(test.store_path(), b"garbage").unwrap();
    let result = store.reload().await;

    assert!(matches!(result, Err(StoreError::Parse { .. })));
    assert_eq!(BlacklistRepository::new(&store).get().await, vec!["1"]);

    Ok(())
}
