use super::*;
use crate::server::{
    data::RecentBanRepository,
    model::{
        ban::BannedUser,
        bypass::BypassDecision,
        moderation::{JoinOutcome, MemberJoin},
    },
    service::{
        enforcement::{EnforcementService, BLACKLIST_BAN_REASON},
        incident::IncidentState,
    },
};

fn join(user_id: u64) -> MemberJoin {
    MemberJoin {
        guild_id: GUILD_ID,
        user_id,
        display_name: format!("User {}", user_id),
    }
}

/// Tests a blacklisted user without bypass joining.
///
/// A previous denial for the same pair is replaced by a fresh pending incident.
///
/// Expected: banned with the system reason, owner asked, pending incident opened
#[tokio::test]
async fn bans_blacklisted_user_and_asks_owner() {
    let test = TestBuilder::new()
        .with_global_blacklist(&["111"])
        .build()
        .unwrap();
    let store = SettingsStore::load(test.store_path()).unwrap();
    let gateway = gateway();
    let incidents = IncidentRegistry::new();
    incidents.complete(GUILD_ID, USER_ID, BypassDecision::Deny);

    let outcome = EnforcementService::new(&store, &gateway, &incidents)
        .handle_join(join(USER_ID))
        .await;

    assert_eq!(outcome, JoinOutcome::Banned { owner_notified: true });
    assert_eq!(
        gateway.calls(),
        vec![
            GatewayCall::Ban {
                guild_id: GUILD_ID,
                user_id: USER_ID,
                reason: BLACKLIST_BAN_REASON.to_string(),
            },
            GatewayCall::BypassRequest {
                owner_id: OWNER_ID,
                guild_id: GUILD_ID,
                user_id: USER_ID,
            },
        ]
    );
    assert_eq!(incidents.state(GUILD_ID, USER_ID), IncidentState::Pending);
}

/// Tests a user who is not blacklisted.
///
/// Expected: Allowed, no gateway calls
#[tokio::test]
async fn ignores_users_not_blacklisted() {
    let test = TestBuilder::new()
        .with_global_blacklist(&["222"])
        .build()
        .unwrap();
    let store = SettingsStore::load(test.store_path()).unwrap();
    let gateway = gateway();
    let incidents = IncidentRegistry::new();

    let outcome = EnforcementService::new(&store, &gateway, &incidents)
        .handle_join(join(USER_ID))
        .await;

    assert_eq!(outcome, JoinOutcome::Allowed);
    assert!(gateway.calls().is_empty());
}

/// Tests a blacklisted user holding a bypass for the guild.
///
/// Expected: Bypassed, no ban
#[tokio::test]
async fn respects_bypass() {
    let test = TestBuilder::new()
        .with_global_blacklist(&["111"])
        .with_bypass("900", &["111"])
        .build()
        .unwrap();
    let store = SettingsStore::load(test.store_path()).unwrap();
    let gateway = gateway();
    let incidents = IncidentRegistry::new();

    let outcome = EnforcementService::new(&store, &gateway, &incidents)
        .handle_join(join(USER_ID))
        .await;

    assert_eq!(outcome, JoinOutcome::Bypassed);
    assert!(gateway.calls().is_empty());
}

/// Tests that enforcement reads the active bot's list in per-bot scope.
///
/// Expected: a user only on the global list is allowed
#[tokio::test]
async fn uses_scoped_blacklist() {
    let test = TestBuilder::new()
        .with_global_blacklist(&["111"])
        .with_bot_blacklist("B", &[])
        .with_active_bot("B")
        .with_scope(false, true)
        .build()
        .unwrap();
    let store = SettingsStore::load(test.store_path()).unwrap();
    let gateway = gateway();
    let incidents = IncidentRegistry::new();

    let outcome = EnforcementService::new(&store, &gateway, &incidents)
        .handle_join(join(USER_ID))
        .await;

    assert_eq!(outcome, JoinOutcome::Allowed);
}

/// Tests a failing ban call.
///
/// Expected: BanFailed, no message sent
#[tokio::test]
async fn ban_failure_leaves_join_unresolved() {
    let test = TestBuilder::new()
        .with_global_blacklist(&["111"])
        .build()
        .unwrap();
    let store = SettingsStore::load(test.store_path()).unwrap();
    let mut gateway = gateway();
    gateway.fail_ban = true;
    let incidents = IncidentRegistry::new();

    let outcome = EnforcementService::new(&store, &gateway, &incidents)
        .handle_join(join(USER_ID))
        .await;

    assert_eq!(outcome, JoinOutcome::BanFailed);
    assert!(gateway.calls().is_empty());
}

/// Tests a failing owner message.
///
/// Expected: the ban stands, owner_notified false
#[tokio::test]
async fn dm_failure_is_swallowed() {
    let test = TestBuilder::new()
        .with_global_blacklist(&["111"])
        .build()
        .unwrap();
    let store = SettingsStore::load(test.store_path()).unwrap();
    let mut gateway = gateway();
    gateway.fail_dm = true;
    let incidents = IncidentRegistry::new();

    let outcome = EnforcementService::new(&store, &gateway, &incidents)
        .handle_join(join(USER_ID))
        .await;

    assert_eq!(outcome, JoinOutcome::Banned { owner_notified: false });
    assert_eq!(gateway.calls().len(), 1);
}

/// Tests recording a ban event.
///
/// Expected: record carries the looked-up reason and guild name, written to both scopes
#[tokio::test]
async fn records_ban_with_reason() {
    let test = TestBuilder::new().with_active_bot("B").build().unwrap();
    let store = SettingsStore::load(test.store_path()).unwrap();
    let mut gateway = gateway();
    gateway
        .ban_reasons
        .insert((GUILD_ID, USER_ID), "spam".to_string());
    let incidents = IncidentRegistry::new();

    let record = EnforcementService::new(&store, &gateway, &incidents)
        .handle_ban(
            GUILD_ID,
            BannedUser {
                id: USER_ID,
                username: "raider".to_string(),
                display_name: "Raider".to_string(),
                avatar: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(record.reason.as_deref(), Some("spam"));
    assert_eq!(record.guild_name, "Guild");
    assert_eq!(RecentBanRepository::new(&store).get().await, vec![record.clone()]);
    let partition = store.read(|doc| doc.bot_data["B"].recent_bans.clone()).await;
    assert_eq!(partition, vec![record]);
}

/// Tests recording a ban in a guild the session cannot resolve.
///
/// Expected: record with empty guild name and no reason
#[tokio::test]
async fn records_ban_with_missing_details() {
    let test = TestBuilder::new().build().unwrap();
    let store = SettingsStore::load(test.store_path()).unwrap();
    let gateway = MockGateway::new();
    let incidents = IncidentRegistry::new();

    let record = EnforcementService::new(&store, &gateway, &incidents)
        .handle_ban(
            5,
            BannedUser {
                id: 6,
                username: "u".to_string(),
                display_name: "u".to_string(),
                avatar: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(record.guild_name, "");
    assert!(record.reason.is_none());
}
