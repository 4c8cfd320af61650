//! Wallet types (`/wallets/*`).

use std::fmt;

use serde::{Deserialize, Serialize};

use super::AlphToken;

/// A wallet and its lock state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletStatus {
    pub wallet_name: String,
    pub locked: bool,
}

impl fmt::Display for WalletStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, locked: {}", self.wallet_name, self.locked)
    }
}

/// A wallet name, as returned when a wallet is restored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletRef {
    pub wallet_name: String,
}

/// A freshly created wallet. Back up the mnemonic: the node will not show it again.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletCreated {
    pub wallet_name: String,
    pub mnemonic: String,
}

impl fmt::Debug for WalletCreated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WalletCreated")
            .field("wallet_name", &self.wallet_name)
            .field("mnemonic", &"<redacted>")
            .finish()
    }
}

/// Body of `POST /wallets`.
///
/// # Example
///
/// ```
/// use alephium_kit::CreateWallet;
///
/// let request = CreateWallet::new("alice", "s3cret").miner(true);
/// assert!(request.is_miner);
/// ```
#[derive(Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWallet {
    pub password: String,
    pub wallet_name: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_miner: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mnemonic_passphrase: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mnemonic_size: Option<u32>,
}

impl CreateWallet {
    pub fn new(wallet_name: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            password: password.into(),
            wallet_name: wallet_name.into(),
            ..Self::default()
        }
    }

    /// Derive one address per group so the wallet can receive mining rewards.
    pub fn miner(mut self, is_miner: bool) -> Self {
        self.is_miner = is_miner;
        self
    }

    pub fn mnemonic_passphrase(mut self, passphrase: impl Into<String>) -> Self {
        self.mnemonic_passphrase = Some(passphrase.into());
        self
    }

    /// Number of mnemonic words (12, 15, 18, 21 or 24).
    pub fn mnemonic_size(mut self, words: u32) -> Self {
        self.mnemonic_size = Some(words);
        self
    }
}

impl fmt::Debug for CreateWallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreateWallet")
            .field("wallet_name", &self.wallet_name)
            .field("is_miner", &self.is_miner)
            .field("mnemonic_size", &self.mnemonic_size)
            .finish_non_exhaustive()
    }
}

/// Body of `PUT /wallets`.
#[derive(Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestoreWallet {
    pub password: String,
    pub mnemonic: String,
    pub wallet_name: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_miner: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mnemonic_passphrase: Option<String>,
}

impl RestoreWallet {
    pub fn new(
        wallet_name: impl Into<String>,
        password: impl Into<String>,
        mnemonic: impl Into<String>,
    ) -> Self {
        Self {
            password: password.into(),
            mnemonic: mnemonic.into(),
            wallet_name: wallet_name.into(),
            ..Self::default()
        }
    }

    pub fn miner(mut self, is_miner: bool) -> Self {
        self.is_miner = is_miner;
        self
    }
}

impl fmt::Debug for RestoreWallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RestoreWallet")
            .field("wallet_name", &self.wallet_name)
            .field("is_miner", &self.is_miner)
            .finish_non_exhaustive()
    }
}

/// Body for endpoints that only take the wallet password.
#[derive(Serialize)]
pub(crate) struct WalletPassword<'a> {
    pub password: &'a str,
}

/// Body of `POST /wallets/{name}/changeActiveAddress`.
#[derive(Serialize)]
pub(crate) struct ActiveAddress<'a> {
    pub address: &'a str,
}

// ============================================================================
// Balances and addresses
// ============================================================================

/// Balances of every address of a wallet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletBalances {
    #[serde(default)]
    pub total_balance: AlphToken,
    #[serde(default)]
    pub balances: Vec<WalletAddressBalance>,
}

/// Balance of one wallet address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletAddressBalance {
    pub address: String,
    pub balance: AlphToken,
}

/// Addresses of a wallet, and which one signs transfers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletAddresses {
    pub active_address: String,
    pub addresses: Vec<WalletAddress>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletAddress {
    pub address: String,
    pub group: u32,
}
