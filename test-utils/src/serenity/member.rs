//! Test factory for creating Serenity Member objects.

use serenity::all::{Member, User};

/// Creates a test Serenity guild Member.
///
/// # Arguments
/// - `guild_id` - Guild the member belongs to
/// - `user` - The member's user object, usually from `create_test_user`
/// - `role_ids` - Roles assigned to the member (not including `@everyone`)
///
/// # Returns
/// - `Member` - A valid Serenity Member struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Member (indicates invalid test data)
pub fn create_test_member(guild_id: u64, user: User, role_ids: &[u64]) -> Member {
    let roles: Vec<String> = role_ids.iter().map(|id| id.to_string()).collect();

    serde_json::from_value(serde_json::json!({
        "user": user,
        "nick": null,
        "avatar": null,
        "roles": roles,
        "joined_at": "2024-01-01T00:00:00Z",
        "premium_since": null,
        "deaf": false,
        "mute": false,
        "flags": 0,
        "pending": false,
        "permissions": null,
        "communication_disabled_until": null,
        "guild_id": guild_id.to_string(),
        "unusual_dm_activity_until": null,
    }))
    .expect("Failed to create test member - invalid JSON structure")
}
