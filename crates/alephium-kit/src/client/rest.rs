//! Low-level REST client for the Alephium full node.

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, Url};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tracing::{debug, warn};

use crate::error::{NodeError, is_retryable_status};

/// REST endpoint of a node running on this machine with default settings.
pub const LOCALHOST_URL: &str = "http://127.0.0.1:12973";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);

/// Header carrying the node API key.
const API_KEY_HEADER: &str = "X-API-KEY";

/// Retry configuration for idempotent node requests.
#[derive(Clone, Debug)]
pub struct RetryConfig {
    /// Maximum number of retries.
    pub max_retries: u32,
    /// Initial delay in milliseconds.
    pub initial_delay_ms: u64,
    /// Maximum delay in milliseconds.
    pub max_delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay_ms: 500,
            max_delay_ms: 5000,
        }
    }
}

impl RetryConfig {
    /// Never retry.
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }

    fn delay(&self, attempt: u32) -> Duration {
        let delay = self
            .initial_delay_ms
            .saturating_mul(2u64.saturating_pow(attempt))
            .min(self.max_delay_ms);
        Duration::from_millis(delay)
    }
}

/// Error body returned by the node on non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorDetail {
    #[serde(default)]
    resource: Option<String>,
    detail: String,
}

/// Low-level REST client for an Alephium node.
///
/// Endpoint methods live next to their resources (`infos`, `wallets`,
/// `addresses`, `miners`, `transactions`). Most code goes through
/// [`Alephium`](crate::Alephium) instead.
#[derive(Clone)]
pub struct NodeClient {
    base: Url,
    client: reqwest::Client,
    retry_config: RetryConfig,
    api_key: Option<String>,
}

impl NodeClient {
    /// Create a client with the default timeout and retry configuration.
    pub fn new(url: &str) -> Result<Self, NodeError> {
        Self::with_retry_config(url, RetryConfig::default())
    }

    /// Create a client with custom retry configuration.
    pub fn with_retry_config(url: &str, retry_config: RetryConfig) -> Result<Self, NodeError> {
        let client = reqwest::Client::builder().timeout(DEFAULT_TIMEOUT).build()?;
        Self::from_parts(url, client, retry_config, None)
    }

    pub(crate) fn from_parts(
        url: &str,
        client: reqwest::Client,
        retry_config: RetryConfig,
        api_key: Option<String>,
    ) -> Result<Self, NodeError> {
        Ok(Self {
            base: parse_base_url(url)?,
            client,
            retry_config,
            api_key,
        })
    }

    /// Get the node base URL.
    pub fn url(&self) -> &str {
        self.base.as_str()
    }

    pub fn retry_config(&self) -> &RetryConfig {
        &self.retry_config
    }

    /// A clone that sends every request exactly once.
    ///
    /// Waits poll through this so that one iteration is one fetch and a
    /// failing fetch ends the wait.
    pub(crate) fn single_attempt(&self) -> NodeClient {
        NodeClient {
            retry_config: RetryConfig::none(),
            ..self.clone()
        }
    }

    // ========================================================================
    // Request plumbing
    // ========================================================================

    /// Build an endpoint URL from path segments and query pairs.
    ///
    /// Segments are percent-encoded, so wallet names and addresses can be
    /// passed through as-is.
    pub(super) fn endpoint(&self, path: &[&str], query: &[(&str, &str)]) -> Result<Url, NodeError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| NodeError::InvalidUrl(self.base.to_string()))?
            .pop_if_empty()
            .extend(path);
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    /// GET `path` and decode the response.
    pub(super) async fn get<R: DeserializeOwned>(&self, path: &[&str]) -> Result<R, NodeError> {
        let url = self.endpoint(path, &[])?;
        self.call(Method::GET, url, None).await
    }

    /// Send a request and decode the response.
    pub(super) async fn call<R: DeserializeOwned>(
        &self,
        method: Method,
        url: Url,
        body: Option<Vec<u8>>,
    ) -> Result<R, NodeError> {
        let text = self.send(method, url, body).await?;
        serde_json::from_str(&text).map_err(NodeError::Json)
    }

    /// Send a request and return the raw response body.
    ///
    /// GET requests are retried on retryable errors; anything else is sent once.
    pub(super) async fn send(
        &self,
        method: Method,
        url: Url,
        body: Option<Vec<u8>>,
    ) -> Result<String, NodeError> {
        let total_attempts = if method == Method::GET {
            self.retry_config.max_retries + 1
        } else {
            1
        };

        for attempt in 0..total_attempts {
            match self.try_send(&method, &url, body.as_deref()).await {
                Ok(text) => return Ok(text),
                Err(e) if e.is_retryable() && attempt < total_attempts - 1 => {
                    let delay = self.retry_config.delay(attempt);
                    warn!(
                        %method,
                        path = url.path(),
                        attempt = attempt + 1,
                        delay_ms = delay.as_millis() as u64,
                        error = %e,
                        "Retrying node request"
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(e) => return Err(e),
            }
        }

        Err(NodeError::Timeout(total_attempts))
    }

    /// Single attempt at a request.
    async fn try_send(
        &self,
        method: &Method,
        url: &Url,
        body: Option<&[u8]>,
    ) -> Result<String, NodeError> {
        debug!(%method, path = url.path(), query = url.query(), "Node request");

        let mut request = self.client.request(method.clone(), url.clone());
        if let Some(api_key) = &self.api_key {
            request = request.header(API_KEY_HEADER, api_key);
        }
        if let Some(body) = body {
            request = request
                .header(CONTENT_TYPE, "application/json")
                .body(body.to_vec());
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(parse_error(status.as_u16(), &text));
        }

        Ok(text)
    }
}

impl std::fmt::Debug for NodeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeClient")
            .field("url", &self.base.as_str())
            .field("retry_config", &self.retry_config)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Serialize a request body.
pub(super) fn json_body<B: Serialize + ?Sized>(body: &B) -> Result<Option<Vec<u8>>, NodeError> {
    Ok(Some(serde_json::to_vec(body)?))
}

fn parse_base_url(url: &str) -> Result<Url, NodeError> {
    let parsed = Url::parse(url).map_err(|_| NodeError::InvalidUrl(url.to_string()))?;
    if parsed.cannot_be_a_base() || !matches!(parsed.scheme(), "http" | "https") {
        return Err(NodeError::InvalidUrl(url.to_string()));
    }
    Ok(parsed)
}

/// Turn a non-2xx response into an error.
///
/// A node `ErrorDetail` body becomes [`NodeError::NotFound`] on 404 and
/// [`NodeError::Api`] otherwise; any other body is a plain network error.
fn parse_error(status: u16, body: &str) -> NodeError {
    match serde_json::from_str::<ErrorDetail>(body) {
        Ok(ErrorDetail { resource, detail }) if status == 404 => {
            NodeError::NotFound { resource, detail }
        }
        Ok(ErrorDetail { resource, detail }) => NodeError::Api {
            status,
            resource,
            detail,
        },
        Err(_) => NodeError::network(
            format!("HTTP {}: {}", status, body),
            Some(status),
            is_retryable_status(status),
        ),
    }
}
