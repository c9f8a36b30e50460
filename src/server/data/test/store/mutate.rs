use super::*;

/// Tests that the first write creates the file and its parent directory.
///
/// Expected: file exists with the mutation applied, no temporary file left behind
#[tokio::test]
async fn creates_file_on_first_write() -> Result<(), StoreError> {
    let test = TestBuilder::new().without_file().build().unwrap();
    let path = test.dir().join("nested").join("settings.json");
    let store = SettingsStore::load(&path)?;

    BlacklistRepository::new(&store).add(42).await?;

    assert!(path.exists());
    assert!(!path.with_extension("json.tmp").exists());
    assert_eq!(read_back(&store)["globalBlacklist"], serde_json::json!(["42"]));

    Ok(())
}

/// Tests that keys written by other tools survive as user settings.
///
/// Expected: the seeded user entry is still present after an unrelated write
#[tokio::test]
async fn keeps_unrelated_keys() -> Result<(), StoreError> {
    let test = TestBuilder::new()
        .with_user_settings("555", serde_json::json!({ "language": "ja", "furigana": true }))
        .build()
        .unwrap();
    let store = SettingsStore::load(test.store_path())?;

    BlacklistRepository::new(&store).add(1).await?;

    let on_disk = read_back(&store);
    assert_eq!(on_disk["555"]["language"], "ja");
    assert_eq!(on_disk["555"]["furigana"], true);

    Ok(())
}

/// Tests a failed flush.
///
/// A directory occupies the target path, so the rename cannot succeed.
///
/// Expected: Err(StoreError::Persist), mutation still visible in the cache
#[tokio::test]
async fn reports_persist_failure() {
    let test = TestBuilder::new().without_file().build().unwrap();
    let store = SettingsStore::load(test.store_path()).unwrap();
    std::fs::create_dir(test.store_path()).unwrap();

    let result = BlacklistRepository::new(&store).add(9).await;

    assert!(matches!(result, Err(StoreError::Persist { .. })));
    assert_eq!(BlacklistRepository::new(&store).get().await, vec!["9"]);
}
