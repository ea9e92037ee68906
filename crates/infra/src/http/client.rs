use std::time::Duration;

use logship_domain::{LogshipError, Result, TransportConfig};
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Response};
use tracing::debug;

use crate::errors::TransportError;

/// HTTP client with built-in retry and timeout support
///
/// Retries are bounded by the configured attempt count and apply to
/// server errors (5xx) and to connect/timeout failures; client errors
/// are returned as-is on the first attempt.
#[derive(Clone)]
pub struct HttpClient {
    client: ReqwestClient,
    max_attempts: usize,
    base_backoff: Duration,
}

impl HttpClient {
    /// Build a client from transport configuration
    pub fn from_config(config: &TransportConfig) -> Result<Self> {
        let client = ReqwestClient::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .no_proxy()
            .build()
            .map_err(|err| LogshipError::from(TransportError::from(err)))?;

        Ok(Self {
            client,
            max_attempts: config.max_attempts.max(1),
            base_backoff: config.retry_backoff,
        })
    }

    /// Create a request builder using the underlying reqwest client
    pub fn request<U>(&self, method: Method, url: U) -> RequestBuilder
    where
        U: reqwest::IntoUrl,
    {
        self.client.request(method, url)
    }

    /// Execute the provided request builder with retry semantics
    pub async fn send(&self, builder: RequestBuilder) -> Result<Response> {
        for attempt in 1..=self.max_attempts {
            let request = builder
                .try_clone()
                .ok_or_else(|| {
                    LogshipError::Internal(
                        "request body cannot be cloned; buffer the body to enable retries"
                            .to_string(),
                    )
                })?
                .build()
                .map_err(|err| LogshipError::from(TransportError::from(err)))?;

            let method = request.method().clone();
            let url = request.url().clone();
            debug!(attempt, %method, %url, "sending HTTP request");

            match self.client.execute(request).await {
                Ok(response) => {
                    let status = response.status();
                    debug!(attempt, %method, %url, %status, "received HTTP response");

                    if status.is_server_error() && attempt < self.max_attempts {
                        self.sleep_with_backoff(attempt).await;
                        continue;
                    }

                    return Ok(response);
                }
                Err(err) => {
                    debug!(attempt, %method, %url, error = %err, "HTTP request failed");

                    if attempt < self.max_attempts && is_retryable(&err) {
                        self.sleep_with_backoff(attempt).await;
                        continue;
                    }

                    return Err(TransportError::from(err).into());
                }
            }
        }

        Err(LogshipError::Internal(
            "http client exhausted retries without producing a result".to_string(),
        ))
    }

    async fn sleep_with_backoff(&self, retry_number: usize) {
        let shift = retry_number.saturating_sub(1).min(8) as u32;
        let delay = self.base_backoff.saturating_mul(1 << shift);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

fn is_retryable(err: &reqwest::Error) -> bool {
    err.is_timeout() || err.is_connect() || err.is_request()
}
