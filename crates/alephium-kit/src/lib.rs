//! A clean, ergonomic Rust client for the Alephium full node.
//!
//! **alephium-kit** wraps the node's REST API with typed requests, exact
//! coin amounts and cancellable waits.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use alephium_kit::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), alephium_kit::Error> {
//!     // Configure once
//!     let alephium = Alephium::localhost().build()?;
//!
//!     // Block until the node has caught up with its peers
//!     alephium.wait_until_synced().await?;
//!
//!     // Check a balance
//!     let balance = alephium.wallet_total_balance("alice").await?;
//!     println!("Balance: {}", balance.pretty());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Design Principles
//!
//! 1. **Single entry point**: Everything hangs off the [`Alephium`] client
//! 2. **Exact amounts**: [`AlphToken`] is a big integer of attoALPH, never a float
//! 3. **Cancellable waits**: every wait takes a [`CancellationToken`](tokio_util::sync::CancellationToken) and a deadline
//! 4. **Progressive disclosure**: [`Alephium::node`] reaches every endpoint directly
//!
//! # Amounts
//!
//! ```
//! use alephium_kit::AlphToken;
//!
//! let amount: AlphToken = "1.5 ALPH".parse().unwrap();
//! assert_eq!(amount.to_string(), "1500000000000000000");
//! assert_eq!(amount.pretty(), "1.5 ALPH");
//! ```

pub mod client;
pub mod error;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{AmountError, Error, NodeError};
pub use types::*;

// Re-export client types
pub use client::{
    Alephium, AlephiumBuilder, NodeClient, PollError, Poller, RetryConfig, SyncWait, TxStatusWait,
};
