//! The main Alephium client.

use std::future::IntoFuture;
use std::sync::Arc;
use std::time::Duration;

use futures::future::BoxFuture;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{Instrument, info, info_span};

use crate::error::{Error, NodeError};
use crate::types::{
    AlphToken, Destination, InterCliquePeerInfo, IntoAlphToken, TX_CONFIRMED, TransactionRef,
    TxStatus, is_synced_with_at_least_one_peer,
};

use super::poll::{DEFAULT_POLL_INTERVAL, Poller};
use super::rest::{DEFAULT_TIMEOUT, LOCALHOST_URL, NodeClient, RetryConfig};

/// The main client for an Alephium full node.
///
/// Wraps a [`NodeClient`] with configuration, polling waits and a few
/// convenience operations. Cloning is cheap and clones share the same
/// connection pool.
///
/// # Example
///
/// ```rust,no_run
/// use alephium_kit::*;
///
/// #[tokio::main]
/// async fn main() -> Result<(), alephium_kit::Error> {
///     let alephium = Alephium::localhost().build()?;
///     alephium.wait_until_synced().await?;
///
///     alephium.node().unlock_wallet("alice", "s3cret").await?;
///     let tx = alephium.transfer("alice", "1DrDyTr9RpRsQnDnXo2YRiPzPW4ooHX5LLoqXrqfMrpQH", "1.5 ALPH").await?;
///     let status = alephium.wait_for_transaction_confirmed(&tx).await?;
///     println!("confirmed in block {:?}", status.block_hash);
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct Alephium {
    node: Arc<NodeClient>,
    poll_interval: Duration,
}

impl Alephium {
    /// Create a builder for a node on this machine (`http://127.0.0.1:12973`).
    pub fn localhost() -> AlephiumBuilder {
        AlephiumBuilder::new(LOCALHOST_URL)
    }

    /// Create a builder with a custom node URL.
    pub fn custom(url: impl Into<String>) -> AlephiumBuilder {
        AlephiumBuilder::new(url)
    }

    /// Create a configured client from environment variables.
    ///
    /// Reads the following environment variables:
    /// - `ALEPHIUM_NODE_URL` (optional): node REST URL. Defaults to localhost.
    /// - `ALEPHIUM_API_KEY` (optional): sent as `X-API-KEY` on every request.
    /// - `ALEPHIUM_POLL_INTERVAL_SECS` (optional): pause between two polls in waits.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the poll interval is not a
    /// positive whole number of seconds.
    pub fn from_env() -> Result<Alephium, Error> {
        let url = std::env::var("ALEPHIUM_NODE_URL").ok();
        let api_key = std::env::var("ALEPHIUM_API_KEY").ok();
        let poll_interval = std::env::var("ALEPHIUM_POLL_INTERVAL_SECS").ok();

        let mut builder = match url {
            Some(url) => Alephium::custom(url),
            None => Alephium::localhost(),
        };

        if let Some(api_key) = api_key.filter(|key| !key.is_empty()) {
            builder = builder.api_key(api_key);
        }

        if let Some(secs) = poll_interval {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                Error::Config(format!(
                    "ALEPHIUM_POLL_INTERVAL_SECS must be a number of seconds, got '{}'",
                    secs
                ))
            })?;
            builder = builder.poll_interval(Duration::from_secs(secs));
        }

        builder.build()
    }

    /// Get the underlying REST client for direct endpoint access.
    pub fn node(&self) -> &NodeClient {
        &self.node
    }

    /// Get the node URL.
    pub fn url(&self) -> &str {
        self.node.url()
    }

    /// Get the default pause between two polls.
    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    fn poller(&self) -> Poller {
        Poller::new(self.poll_interval)
    }

    // ========================================================================
    // Waits
    // ========================================================================

    /// Wait until the node is synced with at least one peer.
    ///
    /// A node without peers counts as synced.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use alephium_kit::*;
    /// # use std::time::Duration;
    /// # async fn example(alephium: Alephium) -> Result<(), Error> {
    /// alephium
    ///     .wait_until_synced()
    ///     .interval(Duration::from_secs(1))
    ///     .timeout(Duration::from_secs(120))
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn wait_until_synced(&self) -> SyncWait {
        SyncWait {
            node: self.node.single_attempt(),
            poller: self.poller(),
        }
    }

    /// Wait until a transaction reaches the given status type.
    pub fn wait_for_transaction_status(
        &self,
        tx: &TransactionRef,
        status: impl Into<String>,
    ) -> TxStatusWait {
        TxStatusWait {
            node: self.node.single_attempt(),
            poller: self.poller(),
            tx: tx.clone(),
            status: status.into(),
        }
    }

    /// Wait until a transaction is confirmed.
    pub fn wait_for_transaction_confirmed(&self, tx: &TransactionRef) -> TxStatusWait {
        self.wait_for_transaction_status(tx, TX_CONFIRMED)
    }

    // ========================================================================
    // Wallet helpers
    // ========================================================================

    /// Check whether the node knows a wallet by this name.
    pub async fn wallet_exists(&self, name: &str) -> Result<bool, Error> {
        match self.node.wallet_status(name).await {
            Ok(_) => Ok(true),
            Err(e) if is_missing_wallet(&e) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// Transfer `amount` from a wallet's active address to `address`.
    ///
    /// The amount accepts typed values or strings such as `"1.5 ALPH"`.
    pub async fn transfer(
        &self,
        wallet: &str,
        address: impl Into<String>,
        amount: impl IntoAlphToken,
    ) -> Result<TransactionRef, Error> {
        let amount = amount.into_alph_token()?;
        let address = address.into();
        info!(wallet, %address, amount = %amount.pretty(), "Submitting transfer");

        let tx = self
            .node
            .transfer(wallet, &[Destination::new(address, amount)])
            .await?;
        info!(
            tx_id = %tx.tx_id,
            from_group = tx.from_group,
            to_group = tx.to_group,
            "Transfer submitted"
        );
        Ok(tx)
    }

    /// Sum of the balances of every address of a wallet.
    pub async fn wallet_total_balance(&self, name: &str) -> Result<AlphToken, Error> {
        Ok(self.node.wallet_balances(name).await?.total_balance)
    }
}

/// Older nodes report a missing wallet as a 400 with a free-form detail.
fn is_missing_wallet(err: &NodeError) -> bool {
    err.is_not_found()
        || err
            .detail()
            .is_some_and(|d| d.starts_with("Wallet not found") || d.ends_with(" not found"))
}

impl std::fmt::Debug for Alephium {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Alephium")
            .field("node", &self.node)
            .field("poll_interval", &self.poll_interval)
            .finish()
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for creating an [`Alephium`] client.
///
/// # Example
///
/// ```rust,no_run
/// use std::time::Duration;
/// use alephium_kit::*;
///
/// # fn example() -> Result<(), Error> {
/// let alephium = Alephium::custom("https://node.example.com")
///     .api_key("my-key")
///     .timeout(Duration::from_secs(10))
///     .retry_config(RetryConfig::none())
///     .poll_interval(Duration::from_secs(2))
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct AlephiumBuilder {
    url: String,
    api_key: Option<String>,
    timeout: Duration,
    retry_config: RetryConfig,
    poll_interval: Duration,
}

impl AlephiumBuilder {
    fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
            retry_config: RetryConfig::default(),
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    /// Send `X-API-KEY` with every request.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the retry configuration. Only GET requests are retried.
    pub fn retry_config(mut self, config: RetryConfig) -> Self {
        self.retry_config = config;
        self
    }

    /// Set the default pause between two polls in waits.
    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<Alephium, Error> {
        if self.poll_interval.is_zero() {
            return Err(Error::Config(
                "poll interval must be greater than zero".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(NodeError::from)?;
        let node = NodeClient::from_parts(&self.url, client, self.retry_config, self.api_key)?;

        Ok(Alephium {
            node: Arc::new(node),
            poll_interval: self.poll_interval,
        })
    }
}

// ============================================================================
// SyncWait
// ============================================================================

/// Wait until the node is synced. Created by [`Alephium::wait_until_synced`].
///
/// Resolves to `Ok(())` once synced, [`Error::Cancelled`] if the token fires
/// or the deadline passes first, and the node error if a fetch fails.
/// Each poll is a single request; the client's [`RetryConfig`] does not apply.
#[must_use = "waits do nothing unless awaited"]
pub struct SyncWait {
    node: NodeClient,
    poller: Poller,
}

impl SyncWait {
    /// Override the pause between two polls.
    pub fn interval(mut self, interval: Duration) -> Self {
        self.poller = self.poller.interval(interval);
        self
    }

    /// Stop waiting once `token` is cancelled.
    pub fn cancel_on(mut self, token: CancellationToken) -> Self {
        self.poller = self.poller.cancel_on(token);
        self
    }

    /// Stop waiting once `deadline` has passed.
    pub fn deadline(mut self, deadline: Instant) -> Self {
        self.poller = self.poller.deadline(deadline);
        self
    }

    /// Stop waiting `timeout` from now.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.poller = self.poller.timeout(timeout);
        self
    }
}

impl IntoFuture for SyncWait {
    type Output = Result<(), Error>;
    type IntoFuture = BoxFuture<'static, Self::Output>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(async move {
            let SyncWait { node, poller } = self;
            let peers = poller
                .poll_until(
                    || node.inter_clique_peer_info(),
                    |peers: &Vec<InterCliquePeerInfo>| is_synced_with_at_least_one_peer(peers),
                )
                .instrument(info_span!("wait_until_synced", url = node.url()))
                .await?;
            info!(peers = peers.len(), "Node is synced");
            Ok(())
        })
    }
}

// ============================================================================
// TxStatusWait
// ============================================================================

/// Wait until a transaction reaches a status type.
/// Created by [`Alephium::wait_for_transaction_status`].
///
/// Resolves to the matching [`TxStatus`]. The comparison is exact string
/// equality on the status type. As with [`SyncWait`], a failed poll is not
/// retried.
#[must_use = "waits do nothing unless awaited"]
pub struct TxStatusWait {
    node: NodeClient,
    poller: Poller,
    tx: TransactionRef,
    status: String,
}

impl TxStatusWait {
    /// Override the pause between two polls.
    pub fn interval(mut self, interval: Duration) -> Self {
        self.poller = self.poller.interval(interval);
        self
    }

    /// Stop waiting once `token` is cancelled.
    pub fn cancel_on(mut self, token: CancellationToken) -> Self {
        self.poller = self.poller.cancel_on(token);
        self
    }

    /// Stop waiting once `deadline` has passed.
    pub fn deadline(mut self, deadline: Instant) -> Self {
        self.poller = self.poller.deadline(deadline);
        self
    }

    /// Stop waiting `timeout` from now.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.poller = self.poller.timeout(timeout);
        self
    }
}

impl IntoFuture for TxStatusWait {
    type Output = Result<TxStatus, Error>;
    type IntoFuture = BoxFuture<'static, Self::Output>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(async move {
            let TxStatusWait {
                node,
                poller,
                tx,
                status,
            } = self;
            let span = info_span!("wait_for_transaction", tx_id = %tx.tx_id, status = %status);
            let reached = poller
                .poll_until(
                    || node.transaction_status(&tx.tx_id, tx.from_group, tx.to_group),
                    |current: &TxStatus| current.is(&status),
                )
                .instrument(span)
                .await?;
            info!(tx_id = %tx.tx_id, status = %reached.kind, "Transaction reached status");
            Ok(reached)
        })
    }
}
