//! `/miners/*` endpoints. The built-in CPU miner is mostly useful on devnets.

use reqwest::Method;

use super::rest::{NodeClient, json_body};
use crate::error::NodeError;
use crate::types::{MinersAddresses, MiningAction};

impl NodeClient {
    /// Start the built-in CPU miner. Returns the node's acknowledgement.
    pub async fn start_mining(&self) -> Result<bool, NodeError> {
        self.mining_action(MiningAction::Start).await
    }

    /// Stop the built-in CPU miner.
    pub async fn stop_mining(&self) -> Result<bool, NodeError> {
        self.mining_action(MiningAction::Stop).await
    }

    async fn mining_action(&self, action: MiningAction) -> Result<bool, NodeError> {
        let url = self.endpoint(&["miners"], &[("action", action.as_str())])?;
        self.call(Method::POST, url, None).await
    }

    pub async fn miners_addresses(&self) -> Result<MinersAddresses, NodeError> {
        self.get(&["miners", "addresses"]).await
    }

    /// Replace the reward addresses, one per group.
    pub async fn update_miners_addresses(&self, addresses: &[String]) -> Result<(), NodeError> {
        let url = self.endpoint(&["miners", "addresses"], &[])?;
        let body = json_body(&MinersAddresses {
            addresses: addresses.to_vec(),
        })?;
        self.send(Method::PUT, url, body).await?;
        Ok(())
    }
}
