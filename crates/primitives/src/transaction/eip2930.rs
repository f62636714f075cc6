use crate::{AccessList, Bytes, ChainId, TxKind, U256};

/// Transaction with an [`AccessList`] ([EIP-2930](https://eips.ethereum.org/EIPS/eip-2930)).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct TxEip2930 {
    /// Added as EIP-155: Simple replay attack protection
    pub chain_id: ChainId,
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
    /// Addresses and storage keys the transaction plans to access.
    pub access_list: AccessList,
    /// Calldata or init code.
    pub input: Bytes,
}
