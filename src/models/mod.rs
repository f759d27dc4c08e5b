pub mod chain;
pub mod wallet;

pub use chain::{CanonicalChain, DisplayClass, TRACKED_CHAINS};
pub use wallet::{TokenBalance, Wallet, WalletId};
