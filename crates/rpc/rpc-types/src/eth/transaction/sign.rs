use crate::Transaction;
use blade_primitives::{serde_helper::hex_bytes, Bytes};
use serde::{Deserialize, Serialize};

/// Response of `eth_signTransaction`: the encoded signed transaction and its decoded form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignTransactionResult {
    /// The signed transaction in its network encoding.
    #[serde(with = "hex_bytes::bytes")]
    pub raw: Bytes,
    /// The signed transaction.
    pub tx: Transaction,
}
