use super::*;
use crate::model::dev::UpdateDevScopeDto;

/// Tests a partial scope update.
///
/// Expected: only the given flag changes, lists are untouched
#[tokio::test]
async fn updates_only_given_flag() -> Result<(), StoreError> {
    let test = TestBuilder::new()
        .with_global_blacklist(&["1"])
        .build()
        .unwrap();
    let store = SettingsStore::load(test.store_path())?;
    let repo = DevScopeRepository::new(&store);

    let scope = repo
        .update(UpdateDevScopeDto {
            is_blacklist_shared: None,
            is_recent_bans_shared: Some(false),
        })
        .await?;

    assert!(scope.is_blacklist_shared);
    assert!(!scope.is_recent_bans_shared);
    assert_eq!(repo.get().await, scope);
    assert_eq!(
        store.read(|doc| doc.global_blacklist.clone()).await,
        vec!["1"]
    );
    assert_eq!(read_back(&store)["isRecentBansShared"], false);

    Ok(())
}
