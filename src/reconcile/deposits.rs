use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Wallet, WalletId};

/// A detected balance increase for one wallet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepositEvent {
    pub wallet_id: WalletId,
    pub coin_delta: Decimal,
    pub usd_delta: Decimal,
}

/// Diff result between two snapshots.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ChangeReport {
    /// Wallets whose observed state differs from the previous snapshot
    /// (including newly added wallets).
    pub changed: Vec<WalletId>,
    /// One event per wallet the data source flagged as having received a
    /// deposit, with best-effort deltas.
    pub deposits: Vec<DepositEvent>,
}

impl ChangeReport {
    pub fn is_quiet(&self) -> bool {
        self.changed.is_empty() && self.deposits.is_empty()
    }
}

/// Compare the previous snapshot against a freshly fetched one.
///
/// Change detection compares `raw_balance` (smallest-unit integer, immune
/// to price drift) and total USD. Deposit deltas are best-effort: when the
/// computed delta is non-positive (stale or missing previous observation),
/// the wallet's full current balance is reported instead.
///
/// Pure function: no I/O, neither snapshot is mutated.
pub fn detect_changes(
    previous: &[Wallet],
    current: &[Wallet],
    deposit_ids: &[WalletId],
) -> ChangeReport {
    let prev_by_id: HashMap<WalletId, &Wallet> =
        previous.iter().map(|w| (w.id, w)).collect();
    let curr_by_id: HashMap<WalletId, &Wallet> =
        current.iter().map(|w| (w.id, w)).collect();

    let mut changed = Vec::new();
    for wallet in current {
        match prev_by_id.get(&wallet.id) {
            // Newly added wallets always count as changed
            None => changed.push(wallet.id),
            Some(prev) => {
                if prev.raw_balance != wallet.raw_balance
                    || prev.total_usd() != wallet.total_usd()
                {
                    changed.push(wallet.id);
                }
            }
        }
    }

    let mut deposits = Vec::new();
    for &id in deposit_ids {
        // A flagged wallet can be gone if it was deleted mid-check
        let Some(wallet) = curr_by_id.get(&id) else {
            tracing::debug!(wallet_id = id, "Deposit flag for wallet missing from snapshot");
            continue;
        };

        let (prev_coin, prev_usd) = prev_by_id
            .get(&id)
            .map(|p| (p.native_coin(), p.total_usd()))
            .unwrap_or((Decimal::ZERO, Decimal::ZERO));

        let coin_delta = best_effort_delta(wallet.native_coin(), prev_coin);
        let usd_delta = best_effort_delta(wallet.total_usd(), prev_usd);

        deposits.push(DepositEvent {
            wallet_id: id,
            coin_delta,
            usd_delta,
        });
    }

    ChangeReport { changed, deposits }
}

/// `current − previous`, falling back to the full current balance when the
/// difference is non-positive (no usable previous observation).
fn best_effort_delta(current: Decimal, previous: Decimal) -> Decimal {
    let delta = current - previous;
    if delta > Decimal::ZERO {
        delta
    } else {
        current
    }
}
