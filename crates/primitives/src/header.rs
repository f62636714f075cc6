use crate::{BlockHash, BlockNumber, Bloom, Bytes, B256, B64};

/// Block header as stored by the chain.
///
/// The hash is carried alongside the fields, it is computed once when the header is sealed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Header {
    /// Hash of the parent block.
    pub parent_hash: B256,
    /// Hash of the ommers list.
    pub ommers_hash: B256,
    /// Block producer. Kept as raw bytes, it is not always a 20 byte address.
    pub miner: Bytes,
    /// State root after executing the block.
    pub state_root: B256,
    /// Root of the transaction trie.
    pub transactions_root: B256,
    /// Root of the receipt trie.
    pub receipts_root: B256,
    /// Bloom filter over all logs of the block.
    pub logs_bloom: Bloom,
    /// Block difficulty.
    pub difficulty: u64,
    /// Block height.
    pub number: BlockNumber,
    /// Gas limit of the block.
    pub gas_limit: u64,
    /// Gas used by all transactions of the block.
    pub gas_used: u64,
    /// Unix timestamp in seconds.
    pub timestamp: u64,
    /// Arbitrary producer data.
    pub extra_data: Bytes,
    /// Mix hash.
    pub mix_hash: B256,
    /// Block nonce.
    pub nonce: B64,
    /// Hash of this header.
    pub hash: BlockHash,
    /// Base fee per gas, zero before the fee market fork.
    pub base_fee_per_gas: u64,
}
