//! Configuration structures for the HTTP transport

use std::time::Duration;

/// Base URL of the production ingestion service
pub const DEFAULT_ENDPOINT: &str = "https://ingest.logship.io";

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_MAX_ATTEMPTS: usize = 3;
const DEFAULT_RETRY_BACKOFF_MS: u64 = 200;

/// Where and how the HTTP transport talks to the ingestion service
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Base URL of the ingestion service
    pub endpoint: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// Total attempts per request (initial try + retries)
    pub max_attempts: usize,
    /// Base delay for exponential retry backoff
    pub retry_backoff: Duration,
    /// User agent reported to the service
    pub user_agent: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            retry_backoff: Duration::from_millis(DEFAULT_RETRY_BACKOFF_MS),
            user_agent: concat!("logship/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl TransportConfig {
    /// Default configuration pointed at a different endpoint
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into(), ..Self::default() }
    }
}
