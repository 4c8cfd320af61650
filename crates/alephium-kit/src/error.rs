//! Error types for alephium-kit.
//!
//! # Error Hierarchy
//!
//! - [`Error`](enum@Error) — Main error type, returned by most operations
//!   - [`NodeError`] — transport and node API errors (network, 404, error details)
//!   - [`AmountError`] — invalid ALPH amounts and arithmetic preconditions
//!   - [`Error::Cancelled`] — a wait gave up because its cancellation fired
//!
//! Polling helpers return [`PollError`](crate::client::PollError), which the
//! [`Alephium`](crate::Alephium) client folds into [`Error`](enum@Error).
//!
//! # Example
//!
//! ```rust,no_run
//! use alephium_kit::*;
//!
//! # async fn example() -> Result<(), Error> {
//! let alephium = Alephium::localhost().build()?;
//!
//! match alephium.node().wallet_status("my-wallet").await {
//!     Ok(status) => println!("locked: {}", status.locked),
//!     Err(NodeError::NotFound { detail, .. }) => println!("no such wallet: {detail}"),
//!     Err(e) => return Err(e.into()),
//! }
//! # Ok(())
//! # }
//! ```

use thiserror::Error;

use crate::client::PollError;

/// Error parsing or computing an ALPH amount.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AmountError {
    #[error("Invalid amount: '{0}'")]
    InvalidAmount(String),

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Amount underflow: result would be negative")]
    Underflow,
}

// ============================================================================
// Node Errors
// ============================================================================

/// Errors raised while talking to the node REST API.
#[derive(Debug, Error)]
pub enum NodeError {
    // ─── Network/Transport ───
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Network error: {message}")]
    Network {
        message: String,
        status_code: Option<u16>,
        retryable: bool,
    },

    #[error("Timeout after {0} attempts")]
    Timeout(u32),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid node URL '{0}'")]
    InvalidUrl(String),

    // ─── Node API ───
    #[error("Not found: {detail}")]
    NotFound {
        resource: Option<String>,
        detail: String,
    },

    #[error("Node API error (HTTP {status}): {detail}")]
    Api {
        status: u16,
        resource: Option<String>,
        detail: String,
    },
}

impl NodeError {
    /// Check if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        match self {
            NodeError::Http(e) => e.is_timeout() || e.is_connect(),
            NodeError::Timeout(_) => true,
            NodeError::Network { retryable, .. } => *retryable,
            NodeError::Api { status, .. } => is_retryable_status(*status),
            _ => false,
        }
    }

    /// Returns true if the node reported the resource as missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, NodeError::NotFound { .. })
    }

    /// The node's error detail message, if the node returned one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            NodeError::NotFound { detail, .. } | NodeError::Api { detail, .. } => Some(detail),
            _ => None,
        }
    }

    /// Create a network error.
    pub fn network(message: impl Into<String>, status_code: Option<u16>, retryable: bool) -> Self {
        NodeError::Network {
            message: message.into(),
            status_code,
            retryable,
        }
    }
}

/// Check if an HTTP status code is retryable.
pub(crate) fn is_retryable_status(status: u16) -> bool {
    // 408 Request Timeout, 429 Too Many Requests, 5xx Server Errors
    status == 408 || status == 429 || (500..600).contains(&status)
}

// ============================================================================
// Main Error Type
// ============================================================================

/// Main error type for alephium-kit operations.
#[derive(Debug, Error)]
pub enum Error {
    // ─── Configuration ───
    #[error("Invalid configuration: {0}")]
    Config(String),

    // ─── Amounts ───
    #[error(transparent)]
    Amount(#[from] AmountError),

    // ─── Node ───
    #[error(transparent)]
    Node(#[from] NodeError),

    // ─── Waiting ───
    #[error("Wait cancelled before the condition was met")]
    Cancelled,
}

impl Error {
    /// Returns true if a wait was cancelled rather than failed.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Cancelled)
    }
}

impl From<PollError<NodeError>> for Error {
    fn from(err: PollError<NodeError>) -> Self {
        match err {
            PollError::Cancelled => Error::Cancelled,
            PollError::FetchFailed(e) => Error::Node(e),
        }
    }
}
