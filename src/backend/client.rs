use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;

use crate::errors::CoreError;
use crate::models::{Wallet, WalletId};

use super::types::{BulkImportRequest, CheckResponse, CreateWalletRequest, UpdateWalletRequest};
use super::WalletBackend;

/// Error payload shape of the backend (`{"detail": "..."}`).
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: String,
}

/// Typed client for the wallet backend REST API.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, CoreError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Map a non-success response to a core error. 4xx carries the server's
    /// message verbatim as a validation failure; anything else is treated
    /// as a transport-level problem.
    async fn error_for(resp: Response) -> CoreError {
        let status = resp.status();
        let detail = resp
            .json::<ErrorBody>()
            .await
            .map(|b| b.detail)
            .unwrap_or_else(|_| format!("HTTP {status}"));

        if status.is_client_error() && status != StatusCode::TOO_MANY_REQUESTS {
            CoreError::Validation(detail)
        } else {
            CoreError::Unexpected(format!("HTTP {status}: {detail}"))
        }
    }

    async fn decode<T: serde::de::DeserializeOwned>(resp: Response) -> Result<T, CoreError> {
        if !resp.status().is_success() {
            return Err(Self::error_for(resp).await);
        }
        Ok(resp.json::<T>().await?)
    }
}

#[async_trait]
impl WalletBackend for BackendClient {
    async fn list_wallets(&self) -> Result<Vec<Wallet>, CoreError> {
        let resp = self.http.get(self.url("/api/wallets")).send().await?;
        Self::decode(resp).await
    }

    async fn create_wallet(&self, req: CreateWalletRequest) -> Result<Wallet, CoreError> {
        let resp = self
            .http
            .post(self.url("/api/wallets"))
            .json(&req)
            .send()
            .await?;
        Self::decode(resp).await
    }

    async fn bulk_import(&self, req: BulkImportRequest) -> Result<Vec<Wallet>, CoreError> {
        let resp = self
            .http
            .post(self.url("/api/wallets/bulk"))
            .json(&req)
            .send()
            .await?;
        Self::decode(resp).await
    }

    async fn update_wallet(
        &self,
        id: WalletId,
        req: UpdateWalletRequest,
    ) -> Result<Wallet, CoreError> {
        let resp = self
            .http
            .put(self.url(&format!("/api/wallets/{id}")))
            .json(&req)
            .send()
            .await?;
        Self::decode(resp).await
    }

    async fn delete_wallet(&self, id: WalletId) -> Result<(), CoreError> {
        let resp = self
            .http
            .delete(self.url(&format!("/api/wallets/{id}")))
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(Self::error_for(resp).await);
        }
        Ok(())
    }

    async fn delete_all_wallets(&self) -> Result<(), CoreError> {
        let resp = self.http.delete(self.url("/api/wallets")).send().await?;
        if !resp.status().is_success() {
            return Err(Self::error_for(resp).await);
        }
        Ok(())
    }

    async fn run_check(&self) -> Result<CheckResponse, CoreError> {
        let resp = self.http.post(self.url("/api/check")).send().await?;
        Self::decode(resp).await
    }
}
