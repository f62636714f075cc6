use crate::{Bytes, ChainId, TxKind, U256};

/// Legacy transaction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct TxLegacy {
    /// Added as EIP-155: Simple replay attack protection
    pub chain_id: Option<ChainId>,
    /// A scalar value equal to the number of transactions sent by the sender.
    pub nonce: u64,
    /// Wei paid per unit of gas.
    pub gas_price: U256,
    /// Maximum amount of gas the transaction may use.
    pub gas_limit: u64,
    /// Recipient, or contract creation.
    pub to: TxKind,
    /// Wei transferred to the recipient.
    pub value: U256,
    /// Calldata or init code.
    pub input: Bytes,
}
