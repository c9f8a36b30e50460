use serde_json::{json, Map, Value};

use crate::{context::TestContext, error::TestError};

/// File name used for the seeded settings document inside the temporary directory.
const STORE_FILE_NAME: &str = "settings.json";

/// Builder for creating test contexts with a seeded settings document.
///
/// Provides a fluent interface for configuring the JSON document the settings store
/// will load. Keys mirror the persisted layout (`globalBlacklist`, `botData`,
/// `activeBotId`, ...), so tests exercise the real deserialization path.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
///
/// let test = TestBuilder::new()
///     .with_global_blacklist(&["111"])
///     .with_active_bot("bot-b")
///     .build()?;
/// ```
pub struct TestBuilder {
    /// Top-level keys of the document written during `build()`.
    document: Map<String, Value>,

    /// Whether `build()` writes the document at all.
    ///
    /// When false the store path points at a file that does not exist, which is how
    /// first-run behaviour is tested.
    write_file: bool,
}

impl TestBuilder {
    /// Creates a new test builder with an empty document.
    pub fn new() -> Self {
        Self {
            document: Map::new(),
            write_file: true,
        }
    }

    /// Seeds the global blacklist, most recent entry first.
    pub fn with_global_blacklist(mut self, user_ids: &[&str]) -> Self {
        self.document
            .insert("globalBlacklist".to_string(), json!(user_ids));
        self
    }

    /// Seeds the private blacklist partition of one bot.
    pub fn with_bot_blacklist(mut self, bot_id: &str, user_ids: &[&str]) -> Self {
        let bot_data = self
            .document
            .entry("botData")
            .or_insert_with(|| Value::Object(Map::new()));

        if let Value::Object(partitions) = bot_data {
            let partition = partitions
                .entry(bot_id)
                .or_insert_with(|| json!({ "blacklist": [], "recentBans": [] }));
            partition["blacklist"] = json!(user_ids);
        }

        self
    }

    /// Registers a bot account and marks it active.
    ///
    /// The account gets a placeholder token and display name.
    pub fn with_active_bot(self, client_id: &str) -> Self {
        self.with_bot_account(client_id).active_bot(client_id)
    }

    /// Registers a bot account without changing the active bot.
    pub fn with_bot_account(mut self, client_id: &str) -> Self {
        let accounts = self
            .document
            .entry("botAccounts")
            .or_insert_with(|| Value::Array(Vec::new()));

        if let Value::Array(accounts) = accounts {
            accounts.push(json!({
                "clientId": client_id,
                "token": format!("token-{}", client_id),
                "secretId": "",
                "displayName": format!("Bot {}", client_id),
                "avatar": null,
            }));
        }

        self
    }

    /// Sets `activeBotId` without registering an account.
    pub fn active_bot(mut self, client_id: &str) -> Self {
        self.document
            .insert("activeBotId".to_string(), json!(client_id));
        self
    }

    /// Sets both scope flags.
    pub fn with_scope(mut self, blacklist_shared: bool, recent_bans_shared: bool) -> Self {
        self.document
            .insert("isBlacklistShared".to_string(), json!(blacklist_shared));
        self.document
            .insert("isRecentBansShared".to_string(), json!(recent_bans_shared));
        self
    }

    /// Seeds the bypass list of a guild.
    pub fn with_bypass(mut self, guild_id: &str, user_ids: &[&str]) -> Self {
        let bypasses = self
            .document
            .entry("serverBypasses")
            .or_insert_with(|| Value::Object(Map::new()));

        if let Value::Object(bypasses) = bypasses {
            bypasses.insert(guild_id.to_string(), json!(user_ids));
        }

        self
    }

    /// Seeds the stored settings of a dashboard user.
    pub fn with_user_settings(mut self, user_id: &str, settings: Value) -> Self {
        self.document.insert(user_id.to_string(), settings);
        self
    }

    /// Sets an arbitrary top-level key.
    pub fn with_key(mut self, key: &str, value: Value) -> Self {
        self.document.insert(key.to_string(), value);
        self
    }

    /// Skips writing the document so the store starts from a missing file.
    pub fn without_file(mut self) -> Self {
        self.write_file = false;
        self
    }

    /// Creates the temporary directory and writes the seeded document.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context owning the temporary directory
    /// - `Err(TestError::Io)` - Failed to create the directory or write the file
    /// - `Err(TestError::Json)` - Failed to serialize the document
    pub fn build(self) -> Result<TestContext, TestError> {
        let dir = tempfile::tempdir()?;
        let store_path = dir.path().join(STORE_FILE_NAME);

        if self.write_file {
            let contents = serde_json::to_vec_pretty(&Value::Object(self.document))?;
            std::fs::write(&store_path, contents)?;
        }

        Ok(TestContext::new(dir, store_path))
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
