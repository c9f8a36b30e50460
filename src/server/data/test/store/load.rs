use super::*;

/// Tests loading when no settings file exists yet.
///
/// Expected: Ok with an empty document and both scope flags shared
#[tokio::test]
async fn missing_file_yields_defaults() -> Result<(), StoreError> {
    let test = TestBuilder::new().without_file().build().unwrap();

    let store = SettingsStore::load(test.store_path())?;

    let (blacklist, scope, active) = store
        .read(|doc| (doc.global_blacklist.clone(), doc.scope(), doc.active_bot_id.clone()))
        .await;
    assert!(blacklist.is_empty());
    assert!(scope.is_blacklist_shared);
    assert!(scope.is_recent_bans_shared);
    assert!(active.is_none());

    Ok(())
}

/// Tests loading a file that is not valid JSON.
///
/// Expected: Err(StoreError::Parse)
#[tokio::test]
async fn corrupt_file_fails() {
    let test = TestBuilder::new().without_file().build().unwrap();
    std::fs::write(test.store_path(), b"{ not json").unwrap();

    let result = SettingsStore::load(test.store_path());

    assert!(matches!(result, Err(StoreError::Parse { .. })));
}

/// Tests that top-level user ID keys are read as user settings.
///
/// Expected: stored fields loaded, missing ones defaulted
#[tokio::test]
async fn reads_user_settings_keys() -> Result<(), StoreError> {
    let test = TestBuilder::new()
        .with_global_blacklist(&["1"])
        .with_user_settings("123", serde_json::json!({ "theme": "light" }))
        .build()
        .unwrap();

    let store = SettingsStore::load(test.store_path())?;
    let settings = UserSettingsRepository::new(&store).get(123).await;

    assert_eq!(settings.theme, "light");
    assert_eq!(settings.language, "en");

    Ok(())
}

/// Tests loading a file with a top-level key that is not a user settings object.
///
/// Expected: Ok, the unknown key survives the next write untouched
#[tokio::test]
async fn keeps_unknown_top_level_keys() -> Result<(), StoreError> {
    let test = TestBuilder::new().without_file().build().unwrap();
    std::fs::write(
        test.store_path(),
        br#"{"globalBlacklist":["1"],"version":2,"notes":"kept"}"#,
    )
    .unwrap();

    let store = SettingsStore::load(test.store_path())?;
    BlacklistRepository::new(&store).add(2).await?;

    let on_disk = read_back(&store);
    assert_eq!(on_disk["globalBlacklist"], serde_json::json!(["2", "1"]));
    assert_eq!(on_disk["version"], 2);
    assert_eq!(on_disk["notes"], "kept");

    Ok(())
}
