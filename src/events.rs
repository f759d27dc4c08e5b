use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::backend::ChainHealth;
use crate::models::{CanonicalChain, WalletId};

/// Events broadcast to the UI collaborator (renderer, notifier, ...).
///
/// The core only supplies the data those actions need; rendering,
/// clipboard, audio and desktop notifications live on the other side of
/// this channel.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum UiEvent {
    #[serde(rename = "deposit")]
    Deposit(DepositNotice),

    #[serde(rename = "balances_updated")]
    BalancesUpdated(BalancesUpdated),

    #[serde(rename = "chain_status")]
    ChainStatus(HashMap<String, ChainHealth>),

    /// Spot prices the latest valuation used, keyed by symbol.
    #[serde(rename = "prices_updated")]
    PricesUpdated(HashMap<String, Decimal>),

    #[serde(rename = "check_failed")]
    CheckFailed { message: String },

    #[serde(rename = "load_failed")]
    LoadFailed { message: String },
}

/// A detected deposit enriched with the display data the UI needs.
#[derive(Debug, Clone, Serialize)]
pub struct DepositNotice {
    pub wallet_id: WalletId,
    pub label: String,
    pub address: String,
    pub chain: CanonicalChain,
    pub coin_delta: Decimal,
    pub usd_delta: Decimal,
    pub detected_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BalancesUpdated {
    /// Number of wallets whose observed state changed this check.
    pub changed: usize,
    /// Total wallets checked.
    pub wallet_count: usize,
    pub overall_usd: Decimal,
    /// True when the check was user-triggered rather than timer-driven.
    pub manual: bool,
}
