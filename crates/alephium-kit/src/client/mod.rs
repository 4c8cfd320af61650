//! Client module for talking to an Alephium full node.
//!
//! This module provides the core client infrastructure:
//!
//! - [`Alephium`] — The main client, the single entry point for all operations
//! - [`AlephiumBuilder`] — Fluent builder for configuring the client
//! - [`NodeClient`] — Low-level REST client with retry logic
//! - [`Poller`] — The polling loop behind every wait
//!
//! # Endpoints
//!
//! [`NodeClient`] exposes one method per node endpoint, grouped by resource:
//!
//! | Resource | Methods |
//! |----------|---------|
//! | `/infos` | `self_clique`, `inter_clique_peer_info`, `discovered_neighbors`, `misbehaviors`, `unban_misbehaviors`, `node_info`, `is_synced` |
//! | `/wallets` | `wallets`, `create_wallet`, `restore_wallet`, `wallet_status`, `lock_wallet`, `unlock_wallet`, `delete_wallet`, `wallet_balances`, `wallet_addresses`, `transfer`, `derive_next_address`, `change_active_address` |
//! | `/addresses` | `address_balance`, `address_group` |
//! | `/miners` | `start_mining`, `stop_mining`, `miners_addresses`, `update_miners_addresses` |
//! | `/transactions` | `transaction_status` |
//!
//! # Waits
//!
//! [`SyncWait`] and [`TxStatusWait`] are builders that resolve when awaited:
//!
//! ```rust,no_run
//! # use alephium_kit::*;
//! # use std::time::Duration;
//! # async fn example(alephium: Alephium, tx: TransactionRef) -> Result<(), Error> {
//! let token = tokio_util::sync::CancellationToken::new();
//! let status = alephium
//!     .wait_for_transaction_confirmed(&tx)
//!     .cancel_on(token.child_token())
//!     .timeout(Duration::from_secs(300))
//!     .await?;
//! # Ok(())
//! # }
//! ```

mod addresses;
mod alephium;
mod infos;
mod miners;
mod poll;
mod rest;
mod transactions;
mod wallets;

pub use alephium::{Alephium, AlephiumBuilder, SyncWait, TxStatusWait};
pub use poll::{DEFAULT_POLL_INTERVAL, PollError, Poller};
pub use rest::{DEFAULT_TIMEOUT, LOCALHOST_URL, NodeClient, RetryConfig};
