use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::chain::CanonicalChain;

/// Server-assigned wallet identifier, unique within a snapshot.
pub type WalletId = i64;

/// A balance of a non-native asset held at a wallet's address,
/// valued independently in USD.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenBalance {
    pub symbol: String,
    /// Token standard / network tag, e.g. "ERC20" or "TRC20".
    pub standard: String,
    #[serde(default)]
    pub raw_balance: u128,
    #[serde(default)]
    pub coin_balance: Decimal,
    #[serde(default)]
    pub usd_balance: Decimal,
}

/// A tracked address with its last-observed balances.
///
/// `raw_balance` is the smallest-unit integer balance (satoshi / wei / sun)
/// and is what change detection compares, since it cannot drift with price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wallet {
    pub id: WalletId,
    pub chain: String,
    pub address: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub raw_balance: u128,
    #[serde(default)]
    pub coin_balance: Decimal,
    #[serde(default)]
    pub usd_balance: Decimal,
    #[serde(default)]
    pub tokens: Vec<TokenBalance>,
}

impl Wallet {
    /// Canonical form of this wallet's chain identifier.
    pub fn canonical_chain(&self) -> CanonicalChain {
        CanonicalChain::canonicalize(&self.chain)
    }

    /// Native USD value plus all token USD values. Balance fields are
    /// never negative by invariant; clamp anyway so a bad upstream value
    /// cannot poison totals.
    pub fn total_usd(&self) -> Decimal {
        let native = self.usd_balance.max(Decimal::ZERO);
        let tokens: Decimal = self
            .tokens
            .iter()
            .map(|t| t.usd_balance.max(Decimal::ZERO))
            .sum();
        native + tokens
    }

    /// Native coin balance, clamped non-negative. Tokens are denominated in
    /// a different asset and never roll into this.
    pub fn native_coin(&self) -> Decimal {
        self.coin_balance.max(Decimal::ZERO)
    }
}
