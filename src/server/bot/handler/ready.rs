//! Ready event handler for bot initialization.
//!
//! Ready fires after the gateway handshake and again after every reconnect. Only the
//! first one of a session signals the manager and schedules the initial bot scan.

use std::time::Duration;

use serenity::all::{Context, Ready};
use tokio::sync::oneshot;

use crate::server::{
    bot::gateway::SerenityGateway, data::SettingsStore, service::scanner::ScannerService,
};

/// Delay before the first scan, giving guild create events time to fill the cache.
const INITIAL_SCAN_DELAY: Duration = Duration::from_secs(10);

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `store` - Settings store the initial scan writes to
/// - `ready_tx` - Manager notification; `None` after the first Ready
/// - `ctx` - Discord context providing the HTTP client and cache
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(
    store: &SettingsStore,
    ready_tx: Option<oneshot::Sender<()>>,
    ctx: Context,
    ready: Ready,
) {
    tracing::info!(
        "{} is connected to Discord ({} guilds)",
        ready.user.name,
        ready.guilds.len()
    );

    let Some(ready_tx) = ready_tx else {
        return;
    };

    if ready_tx.send(()).is_err() {
        tracing::warn!("Bot session became ready after the start wait gave up");
        return;
    }

    let store = store.clone();
    let gateway = SerenityGateway::new(ctx.http.clone(), ctx.cache.clone());

    tokio::spawn(async move {
        tokio::time::sleep(INITIAL_SCAN_DELAY).await;

        if let Err(e) = ScannerService::new(&store, &gateway).scan().await {
            tracing::error!("Initial bot scan failed: {}", e);
        }
    });
}
