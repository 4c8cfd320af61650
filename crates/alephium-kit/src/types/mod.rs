//! Core types for the Alephium node API.
//!
//! One schema per entity, matching the node's REST JSON field names.

mod node;
mod transaction;
mod units;
mod wallet;

pub use node::{
    BuildInfo, DiscoveredNeighbor, InterCliquePeerInfo, IpAndPort, Misbehavior, MisbehaviorStatus,
    MinersAddresses, MiningAction, NodeInfo, PeerAddress, SelfClique,
    is_synced_with_at_least_one_peer,
};
pub(crate) use node::MisbehaviorAction;
pub use transaction::{
    AddressBalance, AddressGroup, AddressRef, Destination, TX_CONFIRMED, TransactionRef, TxStatus,
};
pub(crate) use transaction::TransferRequest;
pub use units::{ALPH_SYMBOL, AlphToken, IntoAlphToken};
pub use wallet::{
    CreateWallet, RestoreWallet, WalletAddress, WalletAddressBalance, WalletAddresses,
    WalletBalances, WalletCreated, WalletRef, WalletStatus,
};
pub(crate) use wallet::{ActiveAddress, WalletPassword};
