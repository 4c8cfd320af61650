//! `/infos/*` endpoints.

use reqwest::Method;

use super::rest::{NodeClient, json_body};
use crate::error::NodeError;
use crate::types::{
    DiscoveredNeighbor, InterCliquePeerInfo, Misbehavior, MisbehaviorAction, NodeInfo, SelfClique,
    is_synced_with_at_least_one_peer,
};

impl NodeClient {
    /// Get info about the clique this node belongs to.
    pub async fn self_clique(&self) -> Result<SelfClique, NodeError> {
        self.get(&["infos", "self-clique"]).await
    }

    /// Get the peers of other cliques and whether each is synced.
    pub async fn inter_clique_peer_info(&self) -> Result<Vec<InterCliquePeerInfo>, NodeError> {
        self.get(&["infos", "inter-clique-peer-info"]).await
    }

    pub async fn discovered_neighbors(&self) -> Result<Vec<DiscoveredNeighbor>, NodeError> {
        self.get(&["infos", "discovered-neighbors"]).await
    }

    /// Get the peers currently penalized or banned.
    pub async fn misbehaviors(&self) -> Result<Vec<Misbehavior>, NodeError> {
        self.get(&["infos", "misbehaviors"]).await
    }

    /// Lift the ban on the given peers.
    pub async fn unban_misbehaviors(&self, peers: &[String]) -> Result<(), NodeError> {
        let url = self.endpoint(&["infos", "misbehaviors"], &[])?;
        let body = json_body(&MisbehaviorAction {
            kind: "unban",
            peers,
        })?;
        self.send(Method::POST, url, body).await?;
        Ok(())
    }

    /// Get the node version and build info.
    pub async fn node_info(&self) -> Result<NodeInfo, NodeError> {
        self.get(&["infos", "node"]).await
    }

    /// Check once whether the node is synced with at least one peer.
    ///
    /// Use [`Alephium::wait_until_synced`](crate::Alephium::wait_until_synced)
    /// to block until it is.
    pub async fn is_synced(&self) -> Result<bool, NodeError> {
        let peers = self.inter_clique_peer_info().await?;
        Ok(is_synced_with_at_least_one_peer(&peers))
    }
}
