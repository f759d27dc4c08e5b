use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Wallet, WalletId};

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct CreateWalletRequest {
    pub chain: String,
    pub address: String,
    pub label: String,
    pub notes: String,
}

/// Bulk import: raw multi-line text, one `address[,label]` per line.
#[derive(Debug, Clone, Serialize)]
pub struct BulkImportRequest {
    pub chain: String,
    pub lines: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateWalletRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

// ---------------------------------------------------------------------------
// Check response
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChainHealthStatus {
    Ok,
    Cooldown,
}

/// Per-chain fetch health, surfaced to the UI unmodified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainHealth {
    pub status: ChainHealthStatus,
    #[serde(default)]
    pub cooldown_remaining: Decimal,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CheckResponse {
    pub wallets: Vec<Wallet>,
    #[serde(default)]
    pub total_usd: Decimal,
    /// Spot prices used for the valuation, keyed by symbol.
    #[serde(default)]
    pub usd_prices: HashMap<String, Decimal>,
    /// Wallet ids the data source flagged as having received a deposit.
    #[serde(default)]
    pub deposits: Vec<WalletId>,
    #[serde(default)]
    pub chain_status: HashMap<String, ChainHealth>,
}
