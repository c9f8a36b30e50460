use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    bot::manager::BotManager, data::SettingsStore, error::AppError,
    service::scanner::ScannerService,
};

/// Every 30 minutes, on the minute.
const SCAN_SCHEDULE: &str = "0 */30 * * * *";

/// Starts the suspicious bot scan scheduler
///
/// Each run scans every guild of the live session and replaces the stored
/// suspicious-bot list. Runs are skipped while no session is running.
///
/// # Arguments
/// - `store`: Settings store receiving the scan result
/// - `bot`: Manager of the gateway session to scan through
pub async fn start_scheduler(store: SettingsStore, bot: BotManager) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(SCAN_SCHEDULE, move |_uuid, _lock| {
        let store = store.clone();
        let bot = bot.clone();

        Box::pin(async move {
            run_scan(&store, &bot).await;
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Suspicious bot scheduler started");

    Ok(())
}

async fn run_scan(store: &SettingsStore, bot: &BotManager) {
    let Some(gateway) = bot.gateway().await else {
        tracing::debug!("Skipping bot scan, no session is running");
        return;
    };

    if let Err(e) = ScannerService::new(store, &gateway).scan().await {
        tracing::error!("Error scanning for suspicious bots: {}", e);
    }
}
