use std::env;

const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the wallet backend API.
    pub api_base_url: String,
    /// HTTP request timeout in seconds.
    pub http_timeout_secs: u64,

    // Auto-check
    pub auto_check_enabled: bool,
    pub auto_check_interval_secs: u64,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            api_base_url: env::var("WALLETWATCH_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_BASE.into()),
            http_timeout_secs: env::var("WALLETWATCH_HTTP_TIMEOUT_SECS")
                .unwrap_or_else(|_| "10".into())
                .parse()
                .unwrap_or(10),
            auto_check_enabled: env::var("WALLETWATCH_AUTO_CHECK")
                .unwrap_or_else(|_| "true".into())
                .parse()
                .unwrap_or(true),
            auto_check_interval_secs: env::var("WALLETWATCH_AUTO_CHECK_INTERVAL_SECS")
                .unwrap_or_else(|_| "60".into())
                .parse()
                .unwrap_or(60),
        })
    }
}
