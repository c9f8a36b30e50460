use super::*;

/// Tests that per-bot history scope hides records written under another bot.
///
/// B already owns a partition, so records written while A was active never reach it.
///
/// Expected: shared scope sees both, bot B's private view sees only its own record
#[tokio::test]
async fn private_scope_reads_active_partition() -> Result<(), StoreError> {
    let test = TestBuilder::new()
        .with_active_bot("A")
        .with_bot_account("B")
        .with_bot_blacklist("B", &[])
        .build()
        .unwrap();
    let store = SettingsStore::load(test.store_path())?;
    let repo = RecentBanRepository::new(&store);

    repo.add(ban_record(1)).await?;
    BotAccountRepository::new(&store).set_active("B").await?;
    repo.add(ban_record(2)).await?;

    let shared: Vec<_> = repo.get().await.into_iter().map(|r| r.user_id).collect();
    assert_eq!(shared, vec!["2", "1"]);

    store
        .mutate(|doc| doc.is_recent_bans_shared = false)
        .await?;

    let private: Vec<_> = repo.get().await.into_iter().map(|r| r.user_id).collect();
    assert_eq!(private, vec!["2"]);

    Ok(())
}
