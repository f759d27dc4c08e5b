use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicU64, AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use rust_decimal::Decimal;

use walletwatch::backend::types::{
    BulkImportRequest, ChainHealth, ChainHealthStatus, CheckResponse, CreateWalletRequest,
    UpdateWalletRequest,
};
use walletwatch::backend::WalletBackend;
use walletwatch::errors::CoreError;
use walletwatch::models::{Wallet, WalletId};

pub const SUPPORTED_CHAINS: [&str; 3] = ["BTC", "ETH", "TRX"];

/// Scripted in-memory backend: wallet CRUD is served from a local list,
/// check responses are played back in order.
pub struct MockBackend {
    wallets: Mutex<Vec<Wallet>>,
    next_id: AtomicI64,
    check_script: Mutex<VecDeque<Result<CheckResponse, String>>>,
    pub fail_list: AtomicBool,
    pub create_calls: AtomicUsize,
    pub check_delay_ms: AtomicU64,
}

impl MockBackend {
    pub fn new(wallets: Vec<Wallet>) -> Self {
        let next_id = wallets.iter().map(|w| w.id).max().unwrap_or(0) + 1;
        Self {
            wallets: Mutex::new(wallets),
            next_id: AtomicI64::new(next_id),
            check_script: Mutex::new(VecDeque::new()),
            fail_list: AtomicBool::new(false),
            create_calls: AtomicUsize::new(0),
            check_delay_ms: AtomicU64::new(0),
        }
    }

    pub fn script_check(&self, response: CheckResponse) {
        self.check_script.lock().unwrap().push_back(Ok(response));
    }

    pub fn script_check_failure(&self, message: &str) {
        self.check_script
            .lock()
            .unwrap()
            .push_back(Err(message.to_string()));
    }
}

#[async_trait]
impl WalletBackend for MockBackend {
    async fn list_wallets(&self) -> Result<Vec<Wallet>, CoreError> {
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(CoreError::Unexpected("connection refused".into()));
        }
        Ok(self.wallets.lock().unwrap().clone())
    }

    async fn create_wallet(&self, req: CreateWalletRequest) -> Result<Wallet, CoreError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        if !SUPPORTED_CHAINS.contains(&req.chain.as_str()) {
            return Err(CoreError::Validation("Unsupported chain".into()));
        }
        let created = Wallet {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            chain: req.chain,
            address: req.address,
            label: req.label,
            notes: req.notes,
            raw_balance: 0,
            coin_balance: Decimal::ZERO,
            usd_balance: Decimal::ZERO,
            tokens: vec![],
        };
        self.wallets.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn bulk_import(&self, req: BulkImportRequest) -> Result<Vec<Wallet>, CoreError> {
        if !SUPPORTED_CHAINS.contains(&req.chain.as_str()) {
            return Err(CoreError::Validation("Unsupported chain".into()));
        }
        let mut created = Vec::new();
        for line in req.lines.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let (address, label) = match line.split_once(',') {
                Some((a, l)) => (a.trim(), l.trim()),
                None => (line, ""),
            };
            if address.is_empty() {
                continue;
            }
            let wallet = Wallet {
                id: self.next_id.fetch_add(1, Ordering::SeqCst),
                chain: req.chain.clone(),
                address: address.to_string(),
                label: label.to_string(),
                notes: String::new(),
                raw_balance: 0,
                coin_balance: Decimal::ZERO,
                usd_balance: Decimal::ZERO,
                tokens: vec![],
            };
            self.wallets.lock().unwrap().push(wallet.clone());
            created.push(wallet);
        }
        Ok(created)
    }

    async fn update_wallet(
        &self,
        id: WalletId,
        req: UpdateWalletRequest,
    ) -> Result<Wallet, CoreError> {
        let mut wallets = self.wallets.lock().unwrap();
        let Some(wallet) = wallets.iter_mut().find(|w| w.id == id) else {
            return Err(CoreError::Validation("Wallet not found".into()));
        };
        if let Some(label) = req.label {
            wallet.label = label;
        }
        if let Some(notes) = req.notes {
            wallet.notes = notes;
        }
        Ok(wallet.clone())
    }

    async fn delete_wallet(&self, id: WalletId) -> Result<(), CoreError> {
        self.wallets.lock().unwrap().retain(|w| w.id != id);
        Ok(())
    }

    async fn delete_all_wallets(&self) -> Result<(), CoreError> {
        self.wallets.lock().unwrap().clear();
        Ok(())
    }

    async fn run_check(&self) -> Result<CheckResponse, CoreError> {
        let delay = self.check_delay_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
        let scripted = self.check_script.lock().unwrap().pop_front();
        match scripted {
            Some(Ok(resp)) => Ok(resp),
            Some(Err(message)) => Err(CoreError::Unexpected(message)),
            None => Err(CoreError::Unexpected("no scripted check response".into())),
        }
    }
}

// ---------------------------------------------------------------------------
// Builders
// ---------------------------------------------------------------------------

pub fn wallet(id: WalletId, chain: &str, address: &str) -> Wallet {
    Wallet {
        id,
        chain: chain.into(),
        address: address.into(),
        label: String::new(),
        notes: String::new(),
        raw_balance: 0,
        coin_balance: Decimal::ZERO,
        usd_balance: Decimal::ZERO,
        tokens: vec![],
    }
}

pub fn with_balances(mut w: Wallet, raw: u128, coin: &str, usd: &str) -> Wallet {
    w.raw_balance = raw;
    w.coin_balance = coin.parse().unwrap();
    w.usd_balance = usd.parse().unwrap();
    w
}

pub fn check_response(wallets: Vec<Wallet>, deposits: Vec<WalletId>) -> CheckResponse {
    let total_usd = wallets.iter().map(|w| w.total_usd()).sum();
    let chain_status: HashMap<String, ChainHealth> = SUPPORTED_CHAINS
        .iter()
        .map(|c| {
            (
                c.to_string(),
                ChainHealth {
                    status: ChainHealthStatus::Ok,
                    cooldown_remaining: Decimal::ZERO,
                },
            )
        })
        .collect();

    CheckResponse {
        wallets,
        total_usd,
        usd_prices: HashMap::new(),
        deposits,
        chain_status,
    }
}
