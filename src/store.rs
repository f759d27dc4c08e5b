use std::sync::Arc;

use tokio::sync::Mutex;

use crate::models::{Wallet, WalletId};

/// Single mutable cell holding the current wallet snapshot.
///
/// The snapshot is immutable once produced: every operation either replaces
/// it wholesale or swaps in a rebuilt copy. Readers always see a complete,
/// consistent snapshot — never a half-applied edit.
#[derive(Clone, Default)]
pub struct WalletStore {
    inner: Arc<Mutex<Vec<Wallet>>>,
}

impl WalletStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clone of the current snapshot.
    pub async fn snapshot(&self) -> Vec<Wallet> {
        self.inner.lock().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.lock().await.is_empty()
    }

    /// Replace the snapshot wholesale (load / check result).
    pub async fn replace(&self, wallets: Vec<Wallet>) {
        let mut inner = self.inner.lock().await;
        tracing::debug!(
            old_count = inner.len(),
            new_count = wallets.len(),
            "Wallet store: snapshot replaced"
        );
        *inner = wallets;
    }

    /// Append a confirmed new wallet (create / bulk import result).
    pub async fn append(&self, wallet: Wallet) {
        self.inner.lock().await.push(wallet);
    }

    pub async fn extend(&self, wallets: Vec<Wallet>) {
        self.inner.lock().await.extend(wallets);
    }

    /// Patch label/notes of one wallet. Returns `false` if the id is unknown.
    pub async fn patch(
        &self,
        id: WalletId,
        label: Option<String>,
        notes: Option<String>,
    ) -> bool {
        let mut inner = self.inner.lock().await;
        let Some(wallet) = inner.iter_mut().find(|w| w.id == id) else {
            tracing::warn!(wallet_id = id, "Wallet store: patch target not found");
            return false;
        };
        if let Some(label) = label {
            wallet.label = label;
        }
        if let Some(notes) = notes {
            wallet.notes = notes;
        }
        true
    }

    /// Remove one wallet. Returns `false` if the id is unknown.
    pub async fn remove(&self, id: WalletId) -> bool {
        let mut inner = self.inner.lock().await;
        let before = inner.len();
        inner.retain(|w| w.id != id);
        before != inner.len()
    }

    pub async fn clear(&self) {
        self.inner.lock().await.clear();
    }
}
