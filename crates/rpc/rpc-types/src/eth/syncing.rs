use blade_primitives::{serde_helper::quantity, BlockNumber};
use serde::{Deserialize, Serialize};

/// Sync progress reported by `eth_syncing` while the node is catching up.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncProgress {
    /// Kind of sync that is running.
    #[serde(rename = "type")]
    pub kind: String,
    /// Block the sync started at.
    #[serde(with = "quantity::u64_hex")]
    pub starting_block: BlockNumber,
    /// Block the node is currently at.
    #[serde(with = "quantity::u64_hex")]
    pub current_block: BlockNumber,
    /// Highest block known to the node.
    #[serde(with = "quantity::u64_hex")]
    pub highest_block: BlockNumber,
}
