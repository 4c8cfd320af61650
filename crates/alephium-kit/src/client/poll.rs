//! Polling until a node-observed condition holds.
//!
//! [`Poller`] drives the single wait loop behind
//! [`Alephium::wait_until_synced`](crate::Alephium::wait_until_synced) and
//! [`Alephium::wait_for_transaction_status`](crate::Alephium::wait_for_transaction_status):
//!
//! 1. stop with [`PollError::Cancelled`] if the token fired or the deadline passed,
//! 2. fetch once; a fetch error stops with [`PollError::FetchFailed`],
//! 3. return the fetched value if the predicate holds,
//! 4. otherwise sleep for the interval and go back to 1.
//!
//! Fetches never overlap and are never interrupted. Cancellation wakes the
//! sleep early but only takes effect at the next check.

use std::future::Future;
use std::time::Duration;

use thiserror::Error;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Default pause between two fetches.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Why a wait stopped without its condition being met.
#[derive(Debug, Error)]
pub enum PollError<E> {
    #[error("Polling cancelled")]
    Cancelled,

    #[error("Fetch failed: {0}")]
    FetchFailed(#[source] E),
}

impl<E> PollError<E> {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, PollError::Cancelled)
    }
}

/// Repeatedly fetch a status until a predicate holds.
///
/// # Example
///
/// ```rust,no_run
/// use std::time::Duration;
/// use alephium_kit::{Poller, is_synced_with_at_least_one_peer};
///
/// # async fn example(node: &alephium_kit::NodeClient) -> Result<(), Box<dyn std::error::Error>> {
/// let poller = Poller::new(Duration::from_secs(1)).timeout(Duration::from_secs(60));
/// poller
///     .poll_until(
///         || node.inter_clique_peer_info(),
///         |peers: &Vec<_>| is_synced_with_at_least_one_peer(peers),
///     )
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Poller {
    interval: Duration,
    cancel: CancellationToken,
    deadline: Option<Instant>,
}

impl Default for Poller {
    fn default() -> Self {
        Self::new(DEFAULT_POLL_INTERVAL)
    }
}

impl Poller {
    /// Create a poller that never gives up on its own.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            cancel: CancellationToken::new(),
            deadline: None,
        }
    }

    /// Set the pause between two fetches.
    pub fn interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Give up once `token` is cancelled.
    pub fn cancel_on(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    /// Give up once `deadline` has passed.
    pub fn deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Give up `timeout` from now.
    pub fn timeout(self, timeout: Duration) -> Self {
        self.deadline(Instant::now() + timeout)
    }

    /// Get the pause between two fetches.
    pub fn poll_interval(&self) -> Duration {
        self.interval
    }

    /// Whether the token fired or the deadline passed.
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled() || self.deadline.is_some_and(|d| Instant::now() >= d)
    }

    /// Fetch until `done` holds for the fetched value, and return that value.
    pub async fn poll_until<T, E, F, Fut, P>(
        &self,
        mut fetch: F,
        mut done: P,
    ) -> Result<T, PollError<E>>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        P: FnMut(&T) -> bool,
    {
        let mut attempt: u32 = 0;
        loop {
            if self.is_cancelled() {
                debug!(attempt, "Wait cancelled");
                return Err(PollError::Cancelled);
            }

            attempt += 1;
            let status = fetch().await.map_err(PollError::FetchFailed)?;
            if done(&status) {
                debug!(attempt, "Condition met");
                return Ok(status);
            }

            debug!(attempt, interval = ?self.interval, "Condition not met yet, sleeping");
            self.pause().await;
        }
    }

    async fn pause(&self) {
        let deadline = async {
            match self.deadline {
                Some(deadline) => tokio::time::sleep_until(deadline).await,
                None => std::future::pending().await,
            }
        };

        tokio::select! {
            _ = tokio::time::sleep(self.interval) => {}
            _ = self.cancel.cancelled() => {}
            _ = deadline => {}
        }
    }
}
