use std::fmt;

use serde::{Deserialize, Serialize};

/// Alias-free chain identifier. Generic stablecoin symbols resolve to their
/// primary network variant (`USDC` → `USDC_ETH`, `USDT` → `USDT_ETH`);
/// anything unrecognized is carried through uppercased and unresolved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CanonicalChain {
    Btc,
    Eth,
    Trx,
    UsdtTrx,
    UsdtEth,
    UsdcEth,
    Other(String),
}

/// The six chains that get their own bucket in per-chain totals.
pub const TRACKED_CHAINS: [CanonicalChain; 6] = [
    CanonicalChain::Btc,
    CanonicalChain::Eth,
    CanonicalChain::Trx,
    CanonicalChain::UsdtTrx,
    CanonicalChain::UsdtEth,
    CanonicalChain::UsdcEth,
];

/// Rendering category the UI uses to pick accent colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayClass {
    Btc,
    Eth,
    Trx,
    Usdt,
    Usdc,
}

impl CanonicalChain {
    /// Resolve a raw chain identifier to its canonical form. Total: unknown
    /// input comes back as `Other(uppercased)`, never an error.
    pub fn canonicalize(chain: &str) -> Self {
        match chain.trim().to_uppercase().as_str() {
            "BTC" => CanonicalChain::Btc,
            "ETH" => CanonicalChain::Eth,
            "TRX" => CanonicalChain::Trx,
            "USDT_TRX" => CanonicalChain::UsdtTrx,
            // Generic stablecoin symbols map to their primary network
            "USDT" | "USDT_ETH" => CanonicalChain::UsdtEth,
            "USDC" | "USDC_ETH" => CanonicalChain::UsdcEth,
            other => CanonicalChain::Other(other.to_string()),
        }
    }

    /// True for the chains tracked in per-chain totals.
    pub fn is_tracked(&self) -> bool {
        !matches!(self, CanonicalChain::Other(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            CanonicalChain::Btc => "BTC",
            CanonicalChain::Eth => "ETH",
            CanonicalChain::Trx => "TRX",
            CanonicalChain::UsdtTrx => "USDT_TRX",
            CanonicalChain::UsdtEth => "USDT_ETH",
            CanonicalChain::UsdcEth => "USDC_ETH",
            CanonicalChain::Other(s) => s.as_str(),
        }
    }

    /// Rendering category for a chain. Unrecognized chains fall back to the
    /// ETH category.
    pub fn display_class(&self) -> DisplayClass {
        match self {
            CanonicalChain::Btc => DisplayClass::Btc,
            CanonicalChain::Eth => DisplayClass::Eth,
            CanonicalChain::Trx => DisplayClass::Trx,
            CanonicalChain::UsdtTrx | CanonicalChain::UsdtEth => DisplayClass::Usdt,
            CanonicalChain::UsdcEth => DisplayClass::Usdc,
            CanonicalChain::Other(_) => DisplayClass::Eth,
        }
    }

    /// Block-explorer address URL for the UI's "open in explorer" action.
    pub fn explorer_url(&self, address: &str) -> String {
        match self {
            CanonicalChain::Btc => format!("https://blockstream.info/address/{address}"),
            CanonicalChain::Eth | CanonicalChain::UsdtEth | CanonicalChain::UsdcEth => {
                format!("https://etherscan.io/address/{address}")
            }
            CanonicalChain::Trx | CanonicalChain::UsdtTrx => {
                format!("https://tronscan.org/#/address/{address}")
            }
            CanonicalChain::Other(_) => "#".to_string(),
        }
    }
}

impl fmt::Display for CanonicalChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonicalize_base_chains() {
        assert_eq!(CanonicalChain::canonicalize("BTC"), CanonicalChain::Btc);
        assert_eq!(CanonicalChain::canonicalize("eth"), CanonicalChain::Eth);
        assert_eq!(CanonicalChain::canonicalize(" trx "), CanonicalChain::Trx);
    }

    #[test]
    fn test_canonicalize_stablecoin_aliases() {
        // Generic symbols resolve to the primary network variant
        assert_eq!(CanonicalChain::canonicalize("USDC"), CanonicalChain::UsdcEth);
        assert_eq!(CanonicalChain::canonicalize("usdt"), CanonicalChain::UsdtEth);
        assert_eq!(
            CanonicalChain::canonicalize("USDT_TRX"),
            CanonicalChain::UsdtTrx
        );
    }

    #[test]
    fn test_canonicalize_unknown_passes_through_uppercased() {
        assert_eq!(
            CanonicalChain::canonicalize("doge"),
            CanonicalChain::Other("DOGE".to_string())
        );
    }

    #[test]
    fn test_display_class() {
        assert_eq!(
            CanonicalChain::canonicalize("BTC").display_class(),
            DisplayClass::Btc
        );
        assert_eq!(
            CanonicalChain::canonicalize("USDT_TRX").display_class(),
            DisplayClass::Usdt
        );
        assert_eq!(
            CanonicalChain::canonicalize("USDC").display_class(),
            DisplayClass::Usdc
        );
        // Fallback category
        assert_eq!(
            CanonicalChain::canonicalize("SOL").display_class(),
            DisplayClass::Eth
        );
    }

    #[test]
    fn test_explorer_url_per_chain() {
        assert!(CanonicalChain::Btc
            .explorer_url("bc1qabc")
            .starts_with("https://blockstream.info/"));
        assert!(CanonicalChain::UsdtEth
            .explorer_url("0xdead")
            .starts_with("https://etherscan.io/"));
        assert!(CanonicalChain::UsdtTrx
            .explorer_url("TRabc")
            .starts_with("https://tronscan.org/"));
        assert_eq!(
            CanonicalChain::Other("DOGE".into()).explorer_url("D123"),
            "#"
        );
    }
}
