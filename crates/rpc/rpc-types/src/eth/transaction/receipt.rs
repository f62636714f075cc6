use crate::Log;
use blade_primitives::{serde_helper::quantity, Address, BlockHash, Bloom, TxHash, B256};
use serde::{Deserialize, Serialize};

/// Transaction receipt
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
    /// Post-transaction state root.
    pub root: B256,
    /// The sum of gas used by this transaction and all preceding transactions in the same block.
    #[serde(with = "quantity::u64_hex")]
    pub cumulative_gas_used: u64,
    /// The bloom filter.
    pub logs_bloom: Bloom,
    /// Logs emitted by this transaction.
    pub logs: Vec<Log>,
    /// Status: either 1 (success) or 0 (failure).
    #[serde(with = "quantity::u64_hex")]
    pub status: u64,
    /// Transaction Hash.
    pub transaction_hash: TxHash,
    /// Index within the block.
    #[serde(with = "quantity::u64_hex")]
    pub transaction_index: u64,
    /// Hash of the block this transaction was included within.
    pub block_hash: BlockHash,
    /// Number of the block this transaction was included within.
    #[serde(with = "quantity::u64_hex")]
    pub block_number: u64,
    /// Gas used by this transaction alone.
    #[serde(with = "quantity::u64_hex")]
    pub gas_used: u64,
    /// Contract address created, or `None` if not a deployment.
    #[serde(default)]
    pub contract_address: Option<Address>,
    /// Address of the sender
    pub from: Address,
    /// Address of the receiver. null when its a contract creation transaction.
    #[serde(default)]
    pub to: Option<Address>,
    /// EIP-2718 Transaction type, Some(1) for AccessList transaction, None for Legacy
    #[serde(rename = "type", with = "quantity::u64_hex")]
    pub transaction_type: u64,
}
