use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rust_decimal::Decimal;
use tokio::sync::{broadcast, Mutex};

use crate::backend::{
    BulkImportRequest, CreateWalletRequest, UpdateWalletRequest, WalletBackend,
};
use crate::errors::CoreError;
use crate::events::{BalancesUpdated, DepositNotice, UiEvent};
use crate::models::{Wallet, WalletId};
use crate::reconcile::{
    aggregate_totals, apply_view, detect_changes, ChangeReport, PortfolioTotals, SortCriteria,
    ViewCriteria,
};
use crate::store::WalletStore;

/// The check/load driver: owns the backend handle, the wallet store, the
/// display-view criteria and the UI event channel.
///
/// Timer-driven and manual checks share `run_check`. A single in-flight
/// guard makes overlapping requests skip instead of racing, so a stale
/// response can never overwrite a newer snapshot.
pub struct Dashboard {
    backend: Arc<dyn WalletBackend>,
    store: WalletStore,
    criteria: Mutex<ViewCriteria>,
    events_tx: broadcast::Sender<UiEvent>,
    check_in_flight: AtomicBool,
}

impl Dashboard {
    pub fn new(backend: Arc<dyn WalletBackend>, events_tx: broadcast::Sender<UiEvent>) -> Self {
        Self {
            backend,
            store: WalletStore::new(),
            criteria: Mutex::new(ViewCriteria::default()),
            events_tx,
            check_in_flight: AtomicBool::new(false),
        }
    }

    pub fn store(&self) -> &WalletStore {
        &self.store
    }

    pub fn subscribe(&self) -> broadcast::Receiver<UiEvent> {
        self.events_tx.subscribe()
    }

    fn emit(&self, event: UiEvent) {
        // No subscribers is fine — the core never depends on the UI side.
        let _ = self.events_tx.send(event);
    }

    // -----------------------------------------------------------------------
    // Load / check
    // -----------------------------------------------------------------------

    /// Initial (or re-)load of the wallet list. A network failure degrades
    /// the store to an empty snapshot rather than failing hard.
    pub async fn load(&self) -> Result<usize, CoreError> {
        match self.backend.list_wallets().await {
            Ok(wallets) => {
                let count = wallets.len();
                self.store.replace(wallets).await;
                tracing::info!(wallet_count = count, "Wallet list loaded");
                Ok(count)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Load failed — degrading to empty snapshot");
                self.store.replace(Vec::new()).await;
                self.emit(UiEvent::LoadFailed {
                    message: e.to_string(),
                });
                Err(e)
            }
        }
    }

    /// Run one check cycle: fetch fresh balances, diff against the prior
    /// snapshot, replace the store, and broadcast what the UI needs.
    ///
    /// Returns `Ok(None)` when skipped because a check is already in
    /// flight. A network failure leaves the prior snapshot intact.
    pub async fn run_check(&self, manual: bool) -> Result<Option<ChangeReport>, CoreError> {
        if self.check_in_flight.swap(true, Ordering::SeqCst) {
            tracing::debug!(manual, "Check already in flight — skipping");
            return Ok(None);
        }
        let result = self.check_inner(manual).await;
        self.check_in_flight.store(false, Ordering::SeqCst);
        result.map(Some)
    }

    async fn check_inner(&self, manual: bool) -> Result<ChangeReport, CoreError> {
        let previous = self.store.snapshot().await;

        let resp = match self.backend.run_check().await {
            Ok(resp) => resp,
            Err(e) => {
                tracing::warn!(error = %e, "Check failed — keeping prior snapshot");
                self.emit(UiEvent::CheckFailed {
                    message: e.to_string(),
                });
                return Err(e);
            }
        };

        let report = detect_changes(&previous, &resp.wallets, &resp.deposits);
        let totals = aggregate_totals(&resp.wallets);
        self.store.replace(resp.wallets.clone()).await;

        for event in &report.deposits {
            let Some(wallet) = resp.wallets.iter().find(|w| w.id == event.wallet_id) else {
                continue;
            };
            tracing::info!(
                wallet_id = event.wallet_id,
                chain = %wallet.chain,
                coin_delta = %event.coin_delta,
                usd_delta = %event.usd_delta,
                "Deposit detected"
            );
            self.emit(UiEvent::Deposit(DepositNotice {
                wallet_id: event.wallet_id,
                label: wallet.label.clone(),
                address: wallet.address.clone(),
                chain: wallet.canonical_chain(),
                coin_delta: event.coin_delta,
                usd_delta: event.usd_delta,
                detected_at: chrono::Utc::now(),
            }));
        }

        if !report.changed.is_empty() || manual {
            self.emit(UiEvent::BalancesUpdated(BalancesUpdated {
                changed: report.changed.len(),
                wallet_count: resp.wallets.len(),
                overall_usd: totals.overall_usd,
                manual,
            }));
        }

        // Cooldown map and spot prices go to the UI unmodified
        self.emit(UiEvent::ChainStatus(resp.chain_status));
        if !resp.usd_prices.is_empty() {
            self.emit(UiEvent::PricesUpdated(resp.usd_prices));
        }

        tracing::debug!(
            changed = report.changed.len(),
            deposits = report.deposits.len(),
            overall_usd = %totals.overall_usd,
            "Check cycle complete"
        );
        Ok(report)
    }

    // -----------------------------------------------------------------------
    // Mutations (optimistic edits confirmed by the backend)
    // -----------------------------------------------------------------------

    pub async fn add_wallet(
        &self,
        chain: &str,
        address: &str,
        label: &str,
        notes: &str,
    ) -> Result<Wallet, CoreError> {
        let address = address.trim();
        if address.is_empty() {
            return Err(CoreError::EmptyInput("Address cannot be empty"));
        }

        let created = self
            .backend
            .create_wallet(CreateWalletRequest {
                chain: chain.to_string(),
                address: address.to_string(),
                label: label.trim().to_string(),
                notes: notes.trim().to_string(),
            })
            .await?;
        self.store.append(created.clone()).await;
        Ok(created)
    }

    /// Import many addresses at once from raw multi-line text
    /// (`address[,label]` per line).
    pub async fn bulk_import(&self, chain: &str, lines: &str) -> Result<Vec<Wallet>, CoreError> {
        if lines.trim().is_empty() {
            return Err(CoreError::EmptyInput("Paste at least one address line"));
        }

        let created = self
            .backend
            .bulk_import(BulkImportRequest {
                chain: chain.to_string(),
                lines: lines.to_string(),
            })
            .await?;
        tracing::info!(created = created.len(), chain, "Bulk import complete");
        self.store.extend(created.clone()).await;
        Ok(created)
    }

    pub async fn update_wallet(
        &self,
        id: WalletId,
        label: Option<String>,
        notes: Option<String>,
    ) -> Result<Wallet, CoreError> {
        let updated = self
            .backend
            .update_wallet(id, UpdateWalletRequest { label, notes })
            .await?;
        self.store
            .patch(id, Some(updated.label.clone()), Some(updated.notes.clone()))
            .await;
        Ok(updated)
    }

    pub async fn remove_wallet(&self, id: WalletId) -> Result<(), CoreError> {
        self.backend.delete_wallet(id).await?;
        self.store.remove(id).await;
        Ok(())
    }

    pub async fn clear_wallets(&self) -> Result<(), CoreError> {
        self.backend.delete_all_wallets().await?;
        self.store.clear().await;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Derived views
    // -----------------------------------------------------------------------

    pub async fn totals(&self) -> PortfolioTotals {
        aggregate_totals(&self.store.snapshot().await)
    }

    /// Filtered, ordered wallet view under the current criteria.
    pub async fn view(&self) -> Vec<Wallet> {
        let criteria = self.criteria.lock().await.clone();
        apply_view(&self.store.snapshot().await, &criteria)
    }

    pub async fn set_search(&self, search: &str) {
        self.criteria.lock().await.filter.search = search.to_string();
    }

    pub async fn set_usd_bounds(&self, min: Option<Decimal>, max: Option<Decimal>) {
        let mut criteria = self.criteria.lock().await;
        criteria.filter.min_usd = min;
        criteria.filter.max_usd = max;
    }

    pub async fn set_sort(&self, sort: SortCriteria) {
        self.criteria.lock().await.sort = sort;
    }

    pub async fn criteria(&self) -> ViewCriteria {
        self.criteria.lock().await.clone()
    }
}
