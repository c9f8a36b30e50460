mod model;
mod server;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::server::{
    bot::manager::BotManager, config::Config, data::SettingsStore, error::AppError,
    scheduler::suspicious_bots, service::incident::IncidentRegistry, startup, state::AppState,
};

const DEFAULT_LOG_FILTER: &str = "info,serenity=warn,tracing::span=warn";

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let config = Config::from_env()?;

    let store = SettingsStore::load(&config.settings_path)?;
    let http_client = startup::setup_reqwest_client()?;
    let oauth_client = startup::setup_oauth_client(&config)?;
    let session = startup::setup_session_layer(&config);
    let cors = startup::setup_cors_layer(&config)?;

    let bot = BotManager::new(
        store.clone(),
        IncidentRegistry::new(),
        config.discord_bot_token.clone(),
    );

    // The dashboard stays usable while the session connects, or if it never does.
    let startup_bot = bot.clone();
    tokio::spawn(async move {
        if !startup_bot.start().await {
            tracing::warn!("Bot session not started; start it from the dashboard");
        }
    });

    let scheduler_store = store.clone();
    let scheduler_bot = bot.clone();
    tokio::spawn(async move {
        if let Err(e) = suspicious_bots::start_scheduler(scheduler_store, scheduler_bot).await {
            tracing::error!("Suspicious bot scheduler error: {}", e);
        }
    });

    let state = AppState {
        store,
        http_client,
        oauth_client,
        bot: bot.clone(),
        operator_ids: Arc::from(config.operator_ids),
        app_url: config.app_url,
        discord_api_url: config.discord_api_url,
    };

    let router = server::router::router()
        .with_state(state)
        .layer(session)
        .layer(cors);

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    bot.stop().await;
    tracing::info!("Server shut down");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
