use crate::{AccessList, Bytes, ChainId, TxKind, U256};

/// A transaction with a priority fee ([EIP-1559](https://eips.ethereum.org/EIPS/eip-1559)).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct TxEip1559 {
    /// Added as EIP-155: Simple replay attack protection
    pub chain_id: ChainId,
    /// A scalar value equal to the number of transactions sent by the sender.
    pub nonce: u64,
    /// Maximum amount of gas the transaction may use.
    pub gas_limit: u64,
    /// Maximum total fee per gas the sender is willing to pay, base fee included.
    pub max_fee_per_gas: U256,
    /// Maximum tip per gas paid to the block producer on top of the base fee.
    pub max_priority_fee_per_gas: U256,
    /// Recipient, or contract creation.
    pub to: TxKind,
    /// Wei transferred to the recipient.
    pub value: U256,
    /// Addresses and storage keys the transaction plans to access.
    pub access_list: AccessList,
    /// Calldata or init code.
    pub input: Bytes,
}

impl TxEip1559 {
    /// Returns the price per gas paid in a block with the given base fee.
    ///
    /// This is `min(max_priority_fee_per_gas + base_fee, max_fee_per_gas)`.
    pub fn effective_gas_price(&self, base_fee: u64) -> U256 {
        self.max_priority_fee_per_gas
            .saturating_add(U256::from(base_fee))
            .min(self.max_fee_per_gas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effective_price_is_capped() {
        let tx = TxEip1559 {
            max_fee_per_gas: U256::from(150),
            max_priority_fee_per_gas: U256::from(20),
            ..Default::default()
        };
        assert_eq!(tx.effective_gas_price(100), U256::from(120));
        assert_eq!(tx.effective_gas_price(140), U256::from(150));
        assert_eq!(tx.effective_gas_price(0), U256::from(20));
    }
}
