//! `/wallets/*` endpoints.
//!
//! Wallet names are sent as single path segments, so names containing `/`
//! or spaces are percent-encoded rather than splitting the path.

use reqwest::Method;

use super::rest::{NodeClient, json_body};
use crate::error::NodeError;
use crate::types::{
    ActiveAddress, AddressRef, CreateWallet, Destination, RestoreWallet, TransactionRef,
    TransferRequest, WalletAddresses, WalletBalances, WalletCreated, WalletPassword, WalletRef,
    WalletStatus,
};

impl NodeClient {
    /// List every wallet known to the node.
    pub async fn wallets(&self) -> Result<Vec<WalletStatus>, NodeError> {
        self.get(&["wallets"]).await
    }

    /// Create a wallet. The returned mnemonic is only shown once.
    pub async fn create_wallet(&self, request: &CreateWallet) -> Result<WalletCreated, NodeError> {
        let url = self.endpoint(&["wallets"], &[])?;
        self.call(Method::POST, url, json_body(request)?).await
    }

    /// Restore a wallet from its mnemonic.
    pub async fn restore_wallet(&self, request: &RestoreWallet) -> Result<WalletRef, NodeError> {
        let url = self.endpoint(&["wallets"], &[])?;
        self.call(Method::PUT, url, json_body(request)?).await
    }

    /// Get the lock state of a wallet.
    ///
    /// Fails with [`NodeError::NotFound`] if the node has no such wallet.
    pub async fn wallet_status(&self, name: &str) -> Result<WalletStatus, NodeError> {
        self.get(&["wallets", name]).await
    }

    pub async fn lock_wallet(&self, name: &str) -> Result<(), NodeError> {
        let url = self.endpoint(&["wallets", name, "lock"], &[])?;
        self.send(Method::POST, url, None).await?;
        Ok(())
    }

    pub async fn unlock_wallet(&self, name: &str, password: &str) -> Result<(), NodeError> {
        let url = self.endpoint(&["wallets", name, "unlock"], &[])?;
        self.send(Method::POST, url, json_body(&WalletPassword { password })?)
            .await?;
        Ok(())
    }

    /// Delete a wallet. The node requires its password.
    pub async fn delete_wallet(&self, name: &str, password: &str) -> Result<(), NodeError> {
        let url = self.endpoint(&["wallets", name], &[])?;
        self.send(Method::DELETE, url, json_body(&WalletPassword { password })?)
            .await?;
        Ok(())
    }

    pub async fn wallet_balances(&self, name: &str) -> Result<WalletBalances, NodeError> {
        self.get(&["wallets", name, "balances"]).await
    }

    pub async fn wallet_addresses(&self, name: &str) -> Result<WalletAddresses, NodeError> {
        self.get(&["wallets", name, "addresses"]).await
    }

    /// Send funds from the wallet's active address. The wallet must be unlocked.
    pub async fn transfer(
        &self,
        name: &str,
        destinations: &[Destination],
    ) -> Result<TransactionRef, NodeError> {
        let url = self.endpoint(&["wallets", name, "transfer"], &[])?;
        self.call(Method::POST, url, json_body(&TransferRequest { destinations })?)
            .await
    }

    /// Derive a new address and make it the active one.
    pub async fn derive_next_address(&self, name: &str) -> Result<AddressRef, NodeError> {
        let url = self.endpoint(&["wallets", name, "deriveNextAddress"], &[])?;
        self.call(Method::POST, url, None).await
    }

    /// Choose which address signs the wallet's transfers.
    pub async fn change_active_address(&self, name: &str, address: &str) -> Result<(), NodeError> {
        let url = self.endpoint(&["wallets", name, "changeActiveAddress"], &[])?;
        self.send(Method::POST, url, json_body(&ActiveAddress { address })?)
            .await?;
        Ok(())
    }
}
