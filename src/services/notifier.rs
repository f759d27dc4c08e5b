use tokio::sync::broadcast;

use crate::events::{BalancesUpdated, DepositNotice, UiEvent};

/// Shorten an address for display: `bc1qw508…v8f3`.
pub fn short_address(address: &str) -> String {
    if address.len() <= 12 {
        address.to_string()
    } else {
        format!("{}…{}", &address[..8], &address[address.len() - 4..])
    }
}

/// Format a deposit notice for the console.
pub fn format_deposit(notice: &DepositNotice) -> String {
    let who = if notice.label.is_empty() {
        short_address(&notice.address)
    } else {
        notice.label.clone()
    };
    format!(
        "Deposit detected: {} [{}] +{} (≈${})",
        who,
        notice.chain,
        notice.coin_delta.round_dp(8).normalize(),
        notice.usd_delta.round_dp(2),
    )
}

/// Format a balances-updated summary.
pub fn format_balances_updated(update: &BalancesUpdated) -> String {
    let body = if update.changed > 0 {
        format!(
            "{} wallet{} changed",
            update.changed,
            if update.changed == 1 { "" } else { "s" }
        )
    } else {
        format!("{} checked", update.wallet_count)
    };
    format!(
        "Balances updated: {} · portfolio ${}",
        body,
        update.overall_usd.round_dp(2)
    )
}

/// Reference UI collaborator: consumes core events and writes them to the
/// log. Lagging behind the channel drops old events, never blocks the core.
pub async fn run_console_notifier(mut events_rx: broadcast::Receiver<UiEvent>) {
    loop {
        match events_rx.recv().await {
            Ok(UiEvent::Deposit(notice)) => {
                tracing::info!("{}", format_deposit(&notice));
            }
            Ok(UiEvent::BalancesUpdated(update)) => {
                tracing::info!("{}", format_balances_updated(&update));
            }
            Ok(UiEvent::ChainStatus(status)) => {
                for (chain, health) in &status {
                    tracing::debug!(
                        chain = %chain,
                        status = ?health.status,
                        cooldown_remaining = %health.cooldown_remaining,
                        "Chain status"
                    );
                }
            }
            Ok(UiEvent::PricesUpdated(prices)) => {
                tracing::debug!(symbols = prices.len(), "Spot prices refreshed");
            }
            Ok(UiEvent::CheckFailed { message }) => {
                tracing::warn!(%message, "Check failed");
            }
            Ok(UiEvent::LoadFailed { message }) => {
                tracing::warn!(%message, "Load failed");
            }
            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "Notifier lagged behind event channel");
            }
            Err(broadcast::error::RecvError::Closed) => break,
        }
    }
}
