pub mod client;
pub mod types;

pub use client::BackendClient;
pub use types::{
    BulkImportRequest, ChainHealth, ChainHealthStatus, CheckResponse, CreateWalletRequest,
    UpdateWalletRequest,
};

use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::{Wallet, WalletId};

/// Seam between the dashboard core and the wallet backend.
///
/// `BackendClient` is the production implementation; tests substitute a
/// scripted mock so the check cycle runs without a server.
#[async_trait]
pub trait WalletBackend: Send + Sync {
    async fn list_wallets(&self) -> Result<Vec<Wallet>, CoreError>;
    async fn create_wallet(&self, req: CreateWalletRequest) -> Result<Wallet, CoreError>;
    async fn bulk_import(&self, req: BulkImportRequest) -> Result<Vec<Wallet>, CoreError>;
    async fn update_wallet(
        &self,
        id: WalletId,
        req: UpdateWalletRequest,
    ) -> Result<Wallet, CoreError>;
    async fn delete_wallet(&self, id: WalletId) -> Result<(), CoreError>;
    async fn delete_all_wallets(&self) -> Result<(), CoreError>;
    async fn run_check(&self) -> Result<CheckResponse, CoreError>;
}
