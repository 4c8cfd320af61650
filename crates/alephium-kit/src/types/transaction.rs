//! Address and transaction types (`/addresses/*`, `/transactions/*`).

use serde::{Deserialize, Serialize};

use super::AlphToken;

/// Status type of a transaction included in a block.
pub const TX_CONFIRMED: &str = "confirmed";

// ============================================================================
// Addresses
// ============================================================================

/// Balance of an address, from `GET /addresses/{address}/balance`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressBalance {
    pub balance: AlphToken,
    #[serde(default)]
    pub balance_hint: Option<String>,
    pub locked_balance: AlphToken,
    #[serde(default)]
    pub locked_balance_hint: Option<String>,
    #[serde(default)]
    pub utxo_num: u32,
}

impl AddressBalance {
    /// Spendable part of the balance.
    pub fn available(&self) -> AlphToken {
        self.balance.saturating_sub(&self.locked_balance)
    }
}

/// Group an address belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressGroup {
    pub group: u32,
}

/// A single address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressRef {
    pub address: String,
}

// ============================================================================
// Transfers
// ============================================================================

/// Recipient of a transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    pub address: String,
    pub amount: AlphToken,
}

impl Destination {
    pub fn new(address: impl Into<String>, amount: AlphToken) -> Self {
        Self {
            address: address.into(),
            amount,
        }
    }
}

/// Body of `POST /wallets/{name}/transfer`.
#[derive(Debug, Serialize)]
pub(crate) struct TransferRequest<'a> {
    pub destinations: &'a [Destination],
}

/// A submitted transaction and the groups it moves between.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRef {
    pub tx_id: String,
    pub from_group: u32,
    pub to_group: u32,
}

// ============================================================================
// Status
// ============================================================================

/// Status of a transaction, from `GET /transactions/status`.
///
/// `kind` is the status type string (e.g. [`TX_CONFIRMED`]); the block and
/// confirmation fields are only present once the transaction is mined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxStatus {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub block_hash: Option<String>,
    #[serde(default)]
    pub block_index: Option<u32>,
    #[serde(default)]
    pub chain_confirmations: Option<u32>,
    #[serde(default)]
    pub from_group_confirmations: Option<u32>,
    #[serde(default)]
    pub to_group_confirmations: Option<u32>,
}

impl TxStatus {
    /// Whether the status type matches `kind` exactly.
    pub fn is(&self, kind: &str) -> bool {
        self.kind == kind
    }

    pub fn is_confirmed(&self) -> bool {
        self.is(TX_CONFIRMED)
    }
}
