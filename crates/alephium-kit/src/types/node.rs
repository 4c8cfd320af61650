//! Node, clique and peer info types (`/infos/*`, `/miners/*`).

use serde::{Deserialize, Serialize};

// ============================================================================
// Clique and peers
// ============================================================================

/// Info about the clique this node belongs to, from `GET /infos/self-clique`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelfClique {
    pub clique_id: String,
    #[serde(default)]
    pub network_type: Option<String>,
    #[serde(default)]
    pub num_zeros_at_least_in_hash: Option<u32>,
    pub nodes: Vec<PeerAddress>,
    /// Whether this clique considers itself synced.
    pub synced: bool,
    pub group_num_per_broker: u32,
    pub groups: u32,
}

/// A node of the local clique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeerAddress {
    pub address: String,
    pub rest_port: u16,
    pub ws_port: u16,
}

/// A peer of another clique, from `GET /infos/inter-clique-peer-info`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterCliquePeerInfo {
    pub clique_id: String,
    pub broker_id: u32,
    pub group_num_per_broker: u32,
    pub address: IpAndPort,
    pub is_synced: bool,
}

/// Socket address as reported by the node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpAndPort {
    pub addr: String,
    pub port: u16,
}

/// A clique is synced when at least one peer reports it is synced.
///
/// An empty peer list counts as synced: a lone node has nobody to catch up with.
pub fn is_synced_with_at_least_one_peer(peers: &[InterCliquePeerInfo]) -> bool {
    peers.is_empty() || peers.iter().any(|peer| peer.is_synced)
}

/// A neighbor found by discovery, from `GET /infos/discovered-neighbors`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveredNeighbor {
    pub clique_id: String,
    pub broker_id: u32,
    pub group_num_per_broker: u32,
}

// ============================================================================
// Misbehaviors
// ============================================================================

/// A peer flagged for misbehaving, from `GET /infos/misbehaviors`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Misbehavior {
    pub peer: String,
    pub status: MisbehaviorStatus,
}

/// Penalty or ban state of a misbehaving peer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MisbehaviorStatus {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: i64,
}

/// Body of `POST /infos/misbehaviors`.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct MisbehaviorAction<'a> {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub peers: &'a [String],
}

// ============================================================================
// Node
// ============================================================================

/// Node version and build info, from `GET /infos/node`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeInfo {
    #[serde(default)]
    pub version: Option<String>,
    pub build_info: BuildInfo,
}

/// Build details of the node binary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildInfo {
    pub release_version: String,
    pub commit: String,
}

// ============================================================================
// Miners
// ============================================================================

/// Built-in CPU miner action, sent as `?action=`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MiningAction {
    Start,
    Stop,
}

impl MiningAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            MiningAction::Start => "start-mining",
            MiningAction::Stop => "stop-mining",
        }
    }
}

/// Reward addresses of the miner, one per group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinersAddresses {
    pub addresses: Vec<String>,
}
