//! HTTP-level tests for alephium-kit against a mocked node.
//!
//! Every test starts its own mock server, so they run in parallel.
//!
//! Run with: `cargo test --test node_api`

mod common;
mod errors;
mod infos;
mod waits;
