//! Chain records shared by the blade RPC crates.
//!
//! These are the node's internal representations of headers, blocks, transactions, receipts and
//! logs, as handed to the RPC layer by storage. The [`serde_helper`] module holds the canonical
//! wire encoding of quantities and byte strings used by every RPC type.

#![doc(issue_tracker_base_url = "https://github.com/blade-chain/blade-rpc/issues/")]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod block;
mod hardfork;
mod header;
mod log;
mod receipt;
pub mod serde_helper;
mod transaction;

pub use block::Block;
pub use hardfork::{ForkCondition, ForkSchedule, Hardfork};
pub use header::Header;
pub use log::Log;
pub use receipt::Receipt;
pub use transaction::{
    AccessList, AccessListItem, Signature, Transaction, TransactionSigned,
    TransactionSignedEcRecovered, TxEip1559, TxEip2930, TxKind, TxLegacy, TxType, UnknownTxType,
    EIP1559_TX_TYPE_ID, EIP2930_TX_TYPE_ID, LEGACY_TX_TYPE_ID,
};

pub use alloy_primitives::{self, hex, Address, Bloom, Bytes, B256, B64, U256};

/// A block hash.
pub type BlockHash = B256;
/// A block number.
pub type BlockNumber = u64;
/// A transaction hash is a keccak hash of an RLP encoded signed transaction.
pub type TxHash = B256;
/// Chain identifier type (introduced in EIP-155).
pub type ChainId = u64;
/// An account storage key.
pub type StorageKey = B256;
/// An account storage value.
pub type StorageValue = B256;
