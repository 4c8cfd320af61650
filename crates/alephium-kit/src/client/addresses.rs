//! `/addresses/*` endpoints.

use super::rest::NodeClient;
use crate::error::NodeError;
use crate::types::{AddressBalance, AddressGroup};

impl NodeClient {
    /// Get the balance of any address, not only wallet ones.
    pub async fn address_balance(&self, address: &str) -> Result<AddressBalance, NodeError> {
        self.get(&["addresses", address, "balance"]).await
    }

    pub async fn address_group(&self, address: &str) -> Result<AddressGroup, NodeError> {
        self.get(&["addresses", address, "group"]).await
    }
}
