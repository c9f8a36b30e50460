//! Lifecycle of the single live gateway session.
//!
//! At most one serenity client runs at a time, under the credential of the active bot
//! account (or `DISCORD_BOT_TOKEN` when none is registered). Starting waits a bounded
//! time for the Ready event; a session that does not become ready is shut down again.
//! Switching credentials is a stop followed by a start, so events arriving in between
//! are not observed. Starts are serialized among themselves; the session slot is only
//! locked briefly, so status reads and stops never wait for a connect in progress.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serenity::all::{Cache, Client, GatewayIntents, GuildId, Http, ShardManager};
use tokio::{
    sync::{oneshot, Mutex},
    task::JoinHandle,
};

use crate::{
    model::bot::{BotGuildDto, BotStatsDto},
    server::{
        bot::{gateway::SerenityGateway, handler::Handler},
        data::{BotAccountRepository, SettingsStore},
        error::AppError,
        service::incident::IncidentRegistry,
    },
};

/// How long `start` waits for the Ready event.
const READY_TIMEOUT: Duration = Duration::from_secs(15);

/// Gateway intents of the session.
///
/// `GUILD_MEMBERS` is privileged and must be enabled for the application in the
/// Discord Developer Portal.
fn intents() -> GatewayIntents {
    GatewayIntents::GUILDS | GatewayIntents::GUILD_MEMBERS | GatewayIntents::GUILD_MODERATION
}

struct BotSession {
    http: Arc<Http>,
    cache: Arc<Cache>,
    shard_manager: Arc<ShardManager>,
    task: JoinHandle<()>,
    started_at: DateTime<Utc>,
}

impl BotSession {
    fn is_running(&self) -> bool {
        !self.task.is_finished()
    }
}

/// Cloneable handle owning the gateway session.
#[derive(Clone)]
pub struct BotManager {
    store: SettingsStore,
    incidents: IncidentRegistry,
    /// Token used when no bot account is active.
    fallback_token: Option<String>,
    session: Arc<Mutex<Option<BotSession>>>,
    /// Held for the whole of `start`, including the wait for Ready.
    start_lock: Arc<Mutex<()>>,
}

impl BotManager {
    pub fn new(
        store: SettingsStore,
        incidents: IncidentRegistry,
        fallback_token: Option<String>,
    ) -> Self {
        Self {
            store,
            incidents,
            fallback_token,
            session: Arc::new(Mutex::new(None)),
            start_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn incidents(&self) -> &IncidentRegistry {
        &self.incidents
    }

    /// Starts the session if it is not already running.
    ///
    /// # Returns
    /// - `true` - A session is running and has received Ready
    /// - `false` - No credential available, the client could not be built, or Ready did
    ///   not arrive within 15 seconds
    pub async fn start(&self) -> bool {
        let _starting = self.start_lock.lock().await;

        {
            let mut session = self.session.lock().await;
            if session.as_ref().is_some_and(BotSession::is_running) {
                return true;
            }
            *session = None;
        }

        let Some(token) = self.resolve_token().await else {
            tracing::warn!("No bot account is active and DISCORD_BOT_TOKEN is not set");
            return false;
        };

        match self.connect(&token).await {
            Ok(started) => {
                *self.session.lock().await = Some(started);
                true
            }
            Err(e) => {
                tracing::error!("Failed to start bot session: {}", e);
                false
            }
        }
    }

    /// Stops the running session. Stopping an idle manager succeeds.
    pub async fn stop(&self) -> bool {
        let Some(session) = self.session.lock().await.take() else {
            return true;
        };

        session.shard_manager.shutdown_all().await;
        session.task.abort();

        tracing::info!("Bot session stopped");

        true
    }

    /// Stops the running session and starts one under the current active credential.
    pub async fn restart(&self) -> bool {
        self.stop().await;
        self.start().await
    }

    /// Gateway over the running session, if any.
    pub async fn gateway(&self) -> Option<SerenityGateway> {
        self.running()
            .await
            .map(|(http, cache)| SerenityGateway::new(http, cache))
    }

    pub async fn status(&self) -> BotStatsDto {
        let session = self.session.lock().await;
        let Some(session) = session.as_ref().filter(|s| s.is_running()) else {
            return BotStatsDto::offline();
        };

        let user = session.cache.current_user().clone();
        let guild_ids = session.cache.guilds();
        let member_count = guild_ids
            .iter()
            .filter_map(|id| session.cache.guild(*id).map(|guild| guild.member_count))
            .sum();

        BotStatsDto {
            online: true,
            id: Some(user.id.to_string()),
            username: Some(user.name.clone()),
            avatar: user.avatar_url(),
            guild_count: guild_ids.len(),
            member_count,
            started_at: Some(session.started_at),
        }
    }

    /// Guilds the running session is a member of; empty when offline.
    pub async fn guilds(&self) -> Vec<BotGuildDto> {
        let Some((_, cache)) = self.running().await else {
            return Vec::new();
        };

        let mut guilds: Vec<BotGuildDto> = cache
            .guilds()
            .into_iter()
            .filter_map(|id| {
                cache.guild(id).map(|guild| BotGuildDto {
                    id: guild.id.to_string(),
                    name: guild.name.clone(),
                    icon: guild.icon_url(),
                    member_count: guild.member_count,
                })
            })
            .collect();
        guilds.sort_by(|a, b| a.name.cmp(&b.name));

        guilds
    }

    /// Makes the bot leave a guild.
    ///
    /// # Returns
    /// - `Ok(())` - Left the guild
    /// - `Err(AppError::ServiceUnavailable)` - No session is running
    /// - `Err(AppError::DiscordErr)` - Discord refused the request
    pub async fn leave_guild(&self, guild_id: u64) -> Result<(), AppError> {
        let Some((http, _)) = self.running().await else {
            return Err(AppError::ServiceUnavailable(
                "The bot is not running".to_string(),
            ));
        };

        http.leave_guild(GuildId::new(guild_id)).await?;

        tracing::info!("Left guild {}", guild_id);

        Ok(())
    }

    async fn running(&self) -> Option<(Arc<Http>, Arc<Cache>)> {
        let session = self.session.lock().await;
        session
            .as_ref()
            .filter(|s| s.is_running())
            .map(|s| (s.http.clone(), s.cache.clone()))
    }

    async fn resolve_token(&self) -> Option<String> {
        match BotAccountRepository::new(&self.store).get_active().await {
            Some(account) => Some(account.token),
            None => self.fallback_token.clone(),
        }
    }

    /// Builds the client, runs it in a background task and waits for Ready.
    async fn connect(&self, token: &str) -> Result<BotSession, AppError> {
        let (ready_tx, ready_rx) = oneshot::channel();
        let handler = Handler::new(self.store.clone(), self.incidents.clone(), ready_tx);

        let mut client = Client::builder(token, intents())
            .event_handler(handler)
            .await?;

        let http = client.http.clone();
        let cache = client.cache.clone();
        let shard_manager = client.shard_manager.clone();

        tracing::info!("Starting Discord bot...");

        let task = tokio::spawn(async move {
            if let Err(e) = client.start().await {
                tracing::error!("Discord bot error: {}", e);
            }
        });

        match tokio::time::timeout(READY_TIMEOUT, ready_rx).await {
            Ok(Ok(())) => Ok(BotSession {
                http,
                cache,
                shard_manager,
                task,
                started_at: Utc::now(),
            }),
            result => {
                shard_manager.shutdown_all().await;
                task.abort();

                let reason = match result {
                    Err(_) => "Ready was not received within 15 seconds",
                    _ => "the session ended before becoming ready",
                };
                Err(AppError::ServiceUnavailable(format!(
                    "Bot session failed to start: {}",
                    reason
                )))
            }
        }
    }
}
