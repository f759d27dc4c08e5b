/// Error taxonomy for the dashboard core.
///
/// None of these are fatal: network failures are recoverable (retry or next
/// timer tick), validation failures carry the server's message verbatim for
/// the UI, and empty-input failures are rejected before any network call.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("network failure: {0}")]
    Network(#[from] reqwest::Error),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    EmptyInput(&'static str),

    #[error("unexpected response: {0}")]
    Unexpected(String),
}

impl CoreError {
    /// True when the prior snapshot should be kept and the operation
    /// retried later (transport-level failure, not a rejected payload).
    pub fn is_recoverable(&self) -> bool {
        matches!(self, CoreError::Network(_) | CoreError::Unexpected(_))
    }
}
