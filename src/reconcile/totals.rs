use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{CanonicalChain, Wallet, TRACKED_CHAINS};

/// Per-chain aggregate: native coin quantity plus USD value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ChainTotals {
    pub coin: Decimal,
    pub usd: Decimal,
}

/// Portfolio-wide totals derived from one snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct PortfolioTotals {
    pub overall_usd: Decimal,
    pub per_chain: HashMap<CanonicalChain, ChainTotals>,
}

/// Aggregate a snapshot into portfolio and per-chain totals.
///
/// Token USD values roll into the parent chain's USD bucket; native coin
/// quantities never mix with token quantities. Wallets on an untracked
/// chain still count toward `overall_usd` but get no bucket. Pure and
/// order-independent: summation only.
pub fn aggregate_totals(snapshot: &[Wallet]) -> PortfolioTotals {
    let mut per_chain: HashMap<CanonicalChain, ChainTotals> = TRACKED_CHAINS
        .iter()
        .map(|c| (c.clone(), ChainTotals::default()))
        .collect();

    let mut overall_usd = Decimal::ZERO;

    for wallet in snapshot {
        let total_usd = wallet.total_usd();
        overall_usd += total_usd;

        let chain = wallet.canonical_chain();
        if let Some(bucket) = per_chain.get_mut(&chain) {
            bucket.usd += total_usd;
            bucket.coin += wallet.native_coin();
        }
    }

    PortfolioTotals {
        overall_usd,
        per_chain,
    }
}

impl PortfolioTotals {
    /// Bucket for one chain; zeroed totals for untracked chains.
    pub fn chain(&self, chain: &CanonicalChain) -> ChainTotals {
        self.per_chain.get(chain).copied().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TokenBalance;

    fn wallet(id: i64, chain: &str, coin: i64, usd: i64) -> Wallet {
        Wallet {
            id,
            chain: chain.into(),
            address: format!("addr_{id}"),
            label: String::new(),
            notes: String::new(),
            raw_balance: 0,
            coin_balance: Decimal::from(coin),
            usd_balance: Decimal::from(usd),
            tokens: vec![],
        }
    }

    fn token(usd: i64) -> TokenBalance {
        TokenBalance {
            symbol: "USDT".into(),
            standard: "ERC20".into(),
            raw_balance: 0,
            coin_balance: Decimal::from(usd),
            usd_balance: Decimal::from(usd),
        }
    }

    #[test]
    fn test_overall_is_sum_of_native_and_token_usd() {
        let mut w1 = wallet(1, "ETH", 2, 5000);
        w1.tokens.push(token(150));
        let w2 = wallet(2, "BTC", 1, 60000);

        let totals = aggregate_totals(&[w1, w2]);
        assert_eq!(totals.overall_usd, Decimal::from(65150));
    }

    #[test]
    fn test_per_chain_buckets() {
        let mut eth = wallet(1, "ETH", 2, 5000);
        eth.tokens.push(token(100));
        let btc = wallet(2, "BTC", 1, 60000);
        let trx = wallet(3, "trx", 900, 120);

        let totals = aggregate_totals(&[eth, btc, trx]);

        let eth_bucket = totals.chain(&CanonicalChain::Eth);
        // Token USD rolls into the parent chain's USD, not its coin
        assert_eq!(eth_bucket.usd, Decimal::from(5100));
        assert_eq!(eth_bucket.coin, Decimal::from(2));

        assert_eq!(totals.chain(&CanonicalChain::Btc).usd, Decimal::from(60000));
        assert_eq!(totals.chain(&CanonicalChain::Trx).coin, Decimal::from(900));
        assert_eq!(totals.chain(&CanonicalChain::UsdcEth), ChainTotals::default());
    }

    #[test]
    fn test_untracked_chain_counts_in_overall_only() {
        let doge = wallet(1, "DOGE", 1000, 80);
        let totals = aggregate_totals(&[doge]);

        assert_eq!(totals.overall_usd, Decimal::from(80));
        let bucketed: Decimal = totals.per_chain.values().map(|b| b.usd).sum();
        assert_eq!(bucketed, Decimal::ZERO);
    }

    #[test]
    fn test_order_independent() {
        let a = wallet(1, "BTC", 1, 100);
        let b = wallet(2, "ETH", 2, 200);
        let c = wallet(3, "USDT", 300, 300);

        let fwd = aggregate_totals(&[a.clone(), b.clone(), c.clone()]);
        let rev = aggregate_totals(&[c, b, a]);
        assert_eq!(fwd.overall_usd, rev.overall_usd);
        assert_eq!(
            fwd.chain(&CanonicalChain::UsdtEth),
            rev.chain(&CanonicalChain::UsdtEth)
        );
    }

    #[test]
    fn test_empty_snapshot() {
        let totals = aggregate_totals(&[]);
        assert_eq!(totals.overall_usd, Decimal::ZERO);
        assert_eq!(totals.per_chain.len(), TRACKED_CHAINS.len());
    }
}
