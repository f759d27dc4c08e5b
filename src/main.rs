use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{broadcast, mpsc};

use walletwatch::backend::BackendClient;
use walletwatch::config::AppConfig;
use walletwatch::events::UiEvent;
use walletwatch::services::notifier::run_console_notifier;
use walletwatch::services::{Dashboard, RefreshScheduler};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    tracing::info!(api = %config.api_base_url, "Starting walletwatch");

    let backend = BackendClient::new(
        config.api_base_url.clone(),
        Duration::from_secs(config.http_timeout_secs),
    )?;

    let (events_tx, events_rx) = broadcast::channel::<UiEvent>(256);
    let dashboard = Arc::new(Dashboard::new(Arc::new(backend), events_tx));

    // Console UI collaborator
    tokio::spawn(run_console_notifier(events_rx));

    // Initial load; a failure degrades to an empty snapshot and is retried
    // by the next check.
    if let Err(e) = dashboard.load().await {
        tracing::warn!(error = %e, "Starting with empty wallet list");
    }

    // --- Auto-check scheduler ---
    let (tick_tx, mut tick_rx) = mpsc::channel::<()>(8);
    let mut scheduler = RefreshScheduler::new(tick_tx);
    if config.auto_check_enabled {
        scheduler.start(config.auto_check_interval_secs);
    } else {
        tracing::info!("Auto-check disabled (WALLETWATCH_AUTO_CHECK=false)");
    }

    // Check driver: timer ticks run the same routine as a manual check
    let check_dashboard = Arc::clone(&dashboard);
    tokio::spawn(async move {
        while tick_rx.recv().await.is_some() {
            if let Err(e) = check_dashboard.run_check(false).await {
                tracing::warn!(error = %e, "Timer-driven check failed");
            }
        }
    });

    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutting down");
    scheduler.stop();

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer())
        .init();
}
