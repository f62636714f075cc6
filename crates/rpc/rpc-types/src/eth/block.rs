//! Block RPC types.

use crate::Transaction;
use blade_primitives::{
    serde_helper::{hex_bytes, quantity},
    BlockHash, BlockNumber, Bloom, TxHash, B256, B64,
};
use serde::{Deserialize, Serialize};

/// Block Transactions depending on the boolean attribute of `eth_getBlockBy*`
///
/// The variant is chosen once per block, a block never mixes hashes and full transactions.
///
/// An empty list carries no variant on the wire and deserializes as [`BlockTransactions::Hashes`].
/// Two empty lists compare equal whatever their variant.
#[derive(Clone, Debug, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BlockTransactions {
    /// Only hashes
    Hashes(Vec<TxHash>),
    /// Full transactions
    Full(Vec<Transaction>),
}

impl BlockTransactions {
    /// Returns the number of transactions.
    pub fn len(&self) -> usize {
        match self {
            Self::Full(txs) => txs.len(),
            Self::Hashes(hashes) => hashes.len(),
        }
    }

    /// Returns `true` if the block has no transactions.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over the transaction hashes.
    pub fn hashes(&self) -> impl Iterator<Item = TxHash> + '_ {
        let (full, hashes) = match self {
            Self::Full(txs) => (Some(txs.iter().map(|tx| tx.hash)), None),
            Self::Hashes(hashes) => (None, Some(hashes.iter().copied())),
        };
        full.into_iter().flatten().chain(hashes.into_iter().flatten())
    }
}

/// Determines how the `transactions` field of [`Block`] should be filled.
///
/// This essentially represents the `full:bool` argument in RPC calls that determine whether the
/// response should include full transaction objects or just the hashes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BlockTransactionsKind {
    /// Only include hashes: [`BlockTransactions::Hashes`]
    #[default]
    Hashes,
    /// Include full transaction objects: [`BlockTransactions::Full`]
    Full,
}

impl From<bool> for BlockTransactionsKind {
    fn from(is_full: bool) -> Self {
        if is_full {
            Self::Full
        } else {
            Self::Hashes
        }
    }
}

impl PartialEq for BlockTransactions {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Hashes(a), Self::Hashes(b)) => a == b,
            (Self::Full(a), Self::Full(b)) => a == b,
            _ => self.is_empty() && other.is_empty(),
        }
    }
}

impl Default for BlockTransactions {
    fn default() -> Self {
        Self::Hashes(Vec::new())
    }
}

/// Block header representation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    /// Hash of the parent
    pub parent_hash: B256,
    /// Hash of the uncles
    #[serde(rename = "sha3Uncles")]
    pub uncles_hash: B256,
    /// Authors address
    #[serde(with = "hex_bytes::vec")]
    pub miner: Vec<u8>,
    /// State root hash
    pub state_root: B256,
    /// Transactions root hash
    pub transactions_root: B256,
    /// Transactions receipts root hash
    pub receipts_root: B256,
    /// Logs bloom
    pub logs_bloom: Bloom,
    /// Difficulty
    #[serde(with = "quantity::u64_hex")]
    pub difficulty: u64,
    /// Total difficulty, reported equal to `difficulty`
    #[serde(with = "quantity::u64_hex")]
    pub total_difficulty: u64,
    /// Block number
    #[serde(with = "quantity::u64_hex")]
    pub number: BlockNumber,
    /// Gas Limit
    #[serde(with = "quantity::u64_hex")]
    pub gas_limit: u64,
    /// Gas Used
    #[serde(with = "quantity::u64_hex")]
    pub gas_used: u64,
    /// Timestamp
    #[serde(with = "quantity::u64_hex")]
    pub timestamp: u64,
    /// Extra data
    #[serde(with = "hex_bytes::vec")]
    pub extra_data: Vec<u8>,
    /// Mix Hash
    pub mix_hash: B256,
    /// Nonce
    pub nonce: B64,
    /// Hash of the block
    pub hash: BlockHash,
    /// Base fee per unit of gas, left out when the block has none
    #[serde(default, skip_serializing_if = "is_zero", with = "quantity::u64_hex")]
    pub base_fee_per_gas: u64,
}

const fn is_zero(value: &u64) -> bool {
    *value == 0
}

/// Block representation
///
/// [`Clone`] produces an independent value, the byte fields of the header are duplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Header of the block
    #[serde(flatten)]
    pub header: Header,
    /// Size in bytes
    #[serde(with = "quantity::u64_hex")]
    pub size: u64,
    /// Block Transactions
    pub transactions: BlockTransactions,
    /// Uncles' hashes
    pub uncles: Vec<B256>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn block() -> Block {
        Block {
            header: Header {
                miner: vec![0xaa; 20],
                extra_data: vec![1, 2, 3],
                difficulty: 1,
                total_difficulty: 1,
                number: 16,
                gas_limit: 30_000_000,
                hash: B256::with_last_byte(0x10),
                ..Default::default()
            },
            size: 512,
            transactions: BlockTransactions::Hashes(vec![B256::with_last_byte(1)]),
            uncles: vec![],
        }
    }

    #[test]
    fn serde_block() {
        let block = block();
        let value = serde_json::to_value(&block).unwrap();
        assert_eq!(value["miner"], format!("0x{}", "aa".repeat(20)));
        assert_eq!(value["extraData"], "0x010203");
        assert_eq!(value["number"], "0x10");
        assert_eq!(value["totalDifficulty"], "0x1");
        assert_eq!(value["nonce"], "0x0000000000000000");
        assert_eq!(value["size"], "0x200");
        assert_eq!(value["uncles"], serde_json::json!([]));
        assert_eq!(
            value["transactions"],
            serde_json::json!(["0x0000000000000000000000000000000000000000000000000000000000000001"])
        );
        assert!(value.get("baseFeePerGas").is_none());

        let deserialized: Block = serde_json::from_value(value).unwrap();
        assert_eq!(deserialized, block);
    }

    #[test]
    fn empty_block_roundtrip() {
        let block = Block::default();
        let s = serde_json::to_string(&block).unwrap();
        let deserialized: Block = serde_json::from_str(&s).unwrap();
        assert_matches!(
            &deserialized.transactions,
            BlockTransactions::Hashes(hashes) if hashes.is_empty()
        );
        assert_eq!(deserialized, block);

        let full = Block { transactions: BlockTransactions::Full(vec![]), ..Default::default() };
        assert_eq!(full, block);
        let one = BlockTransactions::Hashes(vec![B256::ZERO]);
        assert_ne!(full, Block { transactions: one, ..block });
    }

    #[test]
    fn full_transactions_roundtrip() {
        let tx = Transaction { hash: B256::with_last_byte(7), ..Default::default() };
        let block = Block { transactions: BlockTransactions::Full(vec![tx]), ..Default::default() };
        let deserialized: Block =
            serde_json::from_str(&serde_json::to_string(&block).unwrap()).unwrap();
        assert_matches!(&deserialized.transactions, BlockTransactions::Full(txs) if txs.len() == 1);
        assert_eq!(deserialized, block);
    }

    #[test]
    fn base_fee_present_when_set() {
        let header = Header { base_fee_per_gas: 7, ..Default::default() };
        let value = serde_json::to_value(&header).unwrap();
        assert_eq!(value["baseFeePerGas"], "0x7");
    }

    #[test]
    fn copy_is_independent() {
        let source = block();
        let mut copy = source.clone();
        copy.header.miner[0] = 0xbb;
        copy.header.extra_data.push(4);
        assert_eq!(source.header.miner, vec![0xaa; 20]);
        assert_eq!(source.header.extra_data, vec![1, 2, 3]);
    }

    #[test]
    fn transaction_hashes() {
        let txs = BlockTransactions::Hashes(vec![B256::with_last_byte(1), B256::with_last_byte(2)]);
        assert_eq!(txs.len(), 2);
        assert_eq!(
            txs.hashes().collect::<Vec<_>>(),
            vec![B256::with_last_byte(1), B256::with_last_byte(2)]
        );
        assert_eq!(BlockTransactionsKind::from(true), BlockTransactionsKind::Full);
        assert_eq!(BlockTransactionsKind::from(false), BlockTransactionsKind::Hashes);
        assert_matches!(
            BlockTransactions::default(),
            BlockTransactions::Hashes(hashes) if hashes.is_empty()
        );
    }
}
