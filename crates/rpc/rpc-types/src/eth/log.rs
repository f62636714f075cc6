use blade_primitives::{
    serde_helper::{hex_bytes, quantity},
    Address, BlockHash, BlockNumber, Bytes, TxHash, B256,
};
use serde::{Deserialize, Serialize};

/// Ethereum Log emitted by a transaction
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Log {
    /// Address
    pub address: Address,
    /// All topics of the log
    pub topics: Vec<B256>,
    /// Additional data fields of the log
    #[serde(with = "hex_bytes::bytes")]
    pub data: Bytes,
    /// Number of the block the transaction that emitted this log was mined in
    #[serde(with = "quantity::u64_hex")]
    pub block_number: BlockNumber,
    /// Transaction Hash
    pub transaction_hash: TxHash,
    /// Index of the Transaction in the block
    #[serde(with = "quantity::u64_hex")]
    pub transaction_index: u64,
    /// Hash of the block the transaction that emitted this log was mined in
    pub block_hash: BlockHash,
    /// Log Index in Block
    #[serde(with = "quantity::u64_hex")]
    pub log_index: u64,
    /// Geth Compatibility Field: whether this log was removed
    #[serde(default)]
    pub removed: bool,
}
