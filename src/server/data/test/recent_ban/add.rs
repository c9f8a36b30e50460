use super::*;
use crate::server::data::document::RECENT_BAN_LIMIT;

/// Tests that the history keeps only the newest records.
///
/// Adds more than the limit and checks both the global ring and the bot partition.
///
/// Expected: exactly 50 records each, newest first, oldest evicted
#[tokio::test]
async fn caps_history_at_limit() -> Result<(), StoreError> {
    let test = TestBuilder::new().with_active_bot("B").build().unwrap();
    let store = SettingsStore::load(test.store_path())?;
    let repo = RecentBanRepository::new(&store);

    for user_id in 1..=60 {
        repo.add(ban_record(user_id)).await?;
    }

    let (global, partition) = store
        .read(|doc| (doc.recent_bans.clone(), doc.bot_data["B"].recent_bans.clone()))
        .await;
    assert_eq!(global.len(), RECENT_BAN_LIMIT);
    assert_eq!(partition.len(), RECENT_BAN_LIMIT);
    assert_eq!(global[0].user_id, "60");
    assert_eq!(global[RECENT_BAN_LIMIT - 1].user_id, "11");
    assert_eq!(global, partition);

    Ok(())
}

/// Tests that a record lands in the persisted file.
///
/// Expected: file holds the record under recentBans
#[tokio::test]
async fn persists_record() -> Result<(), StoreError> {
    let test = TestBuilder::new().build().unwrap();
    let store = SettingsStore::load(test.store_path())?;

    RecentBanRepository::new(&store).add(ban_record(7)).await?;

    let on_disk = read_back(&store);
    assert_eq!(on_disk["recentBans"][0]["userId"], "7");
    assert_eq!(on_disk["recentBans"][0]["guildName"], "Guild");

    Ok(())
}

/// Tests the first ban recorded for a bot activated after history already exists.
///
/// Expected: the new partition holds the new record followed by the global history
#[tokio::test]
async fn seeds_new_partition_from_global_history() -> Result<(), StoreError> {
    let test = TestBuilder::new().build().unwrap();
    let store = SettingsStore::load(test.store_path())?;
    let repo = RecentBanRepository::new(&store);

    repo.add(ban_record(1)).await?;
    store
        .mutate(|doc| {
            doc.active_bot_id = Some("B".to_string());
            doc.is_recent_bans_shared = false;
        })
        .await?;
    repo.add(ban_record(2)).await?;

    let partition = store.read(|doc| doc.bot_data["B"].recent_bans.clone()).await;
    let ids: Vec<_> = partition.iter().map(|r| r.user_id.as_str()).collect();
    assert_eq!(ids, vec!["2", "1"]);

    Ok(())
}
