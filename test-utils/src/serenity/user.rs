//! Test factory for creating Serenity User objects.

use serenity::all::User;

/// Public flag bit Discord sets on verified bot accounts.
const VERIFIED_BOT_FLAG: u64 = 1 << 16;

/// Creates a test Serenity User.
///
/// # Arguments
/// - `user_id` - Discord user ID (snowflake)
/// - `username` - Unique username; also used as the global display name
/// - `bot` - Whether the account is a bot
/// - `verified_bot` - Whether the `VERIFIED_BOT` public flag is set
///
/// # Returns
/// - `User` - A valid Serenity User struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a User (indicates invalid test data)
pub fn create_test_user(user_id: u64, username: &str, bot: bool, verified_bot: bool) -> User {
    let public_flags = if verified_bot { VERIFIED_BOT_FLAG } else { 0 };

    serde_json::from_value(serde_json::json!({
        "id": user_id.to_string(),
        "username": username,
        "discriminator": "0",
        "global_name": username,
        "avatar": null,
        "bot": bot,
        "system": false,
        "mfa_enabled": false,
        "premium_type": 0,
        "public_flags": public_flags,
    }))
    .expect("Failed to create test user - invalid JSON structure")
}
