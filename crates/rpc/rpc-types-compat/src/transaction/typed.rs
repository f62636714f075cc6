use blade_primitives::{
    BlockHash, BlockNumber, Transaction as PrimitiveTransaction, TransactionSigned,
    TransactionSignedEcRecovered, TxEip1559, TxEip2930, TxLegacy, TxType, UnknownTxType,
};
use blade_rpc_types::Transaction;

/// Errors that can occur when converting an rpc transaction back into a signed transaction.
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    /// The payload is not a well formed rpc transaction.
    #[error("invalid transaction json: {0}")]
    Json(#[from] serde_json::Error),
    /// The transaction type is not supported.
    #[error(transparent)]
    UnknownTxType(#[from] UnknownTxType),
    /// A field required by the transaction type is missing.
    #[error("missing `{field}` for transaction type {tx_type}")]
    MissingField {
        /// Wire name of the missing field.
        field: &'static str,
        /// The EIP-2718 type of the transaction.
        tx_type: u8,
    },
}

/// Position of a mined transaction, each field is `None` when the wire object doesn't carry it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlockContext {
    /// Hash of the including block.
    pub block_hash: Option<BlockHash>,
    /// Number of the including block.
    pub block_number: Option<BlockNumber>,
    /// Index of the transaction within the block.
    pub transaction_index: Option<u64>,
}

/// A signed transaction decoded from its rpc form, together with its block position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionWithContext {
    /// The signed transaction with its sender.
    pub transaction: TransactionSignedEcRecovered,
    /// Where the transaction was included, if it is mined.
    pub context: BlockContext,
}

impl TransactionWithContext {
    /// Parses an rpc transaction object, as returned by `eth_getTransactionByHash`.
    pub fn from_json(bytes: &[u8]) -> Result<Self, ConversionError> {
        let tx: Transaction = serde_json::from_slice(bytes)?;
        tx.try_into()
    }
}

impl TryFrom<Transaction> for TransactionWithContext {
    type Error = ConversionError;

    fn try_from(tx: Transaction) -> Result<Self, Self::Error> {
        let tx_type = TxType::try_from(tx.transaction_type)?;
        let missing = |field| ConversionError::MissingField { field, tx_type: tx_type.into() };

        let transaction = match tx_type {
            TxType::Legacy => PrimitiveTransaction::Legacy(TxLegacy {
                chain_id: tx.chain_id,
                nonce: tx.nonce,
                gas_price: tx.gas_price.ok_or_else(|| missing("gasPrice"))?,
                gas_limit: tx.gas,
                to: tx.to.into(),
                value: tx.value,
                input: tx.input,
            }),
            TxType::Eip2930 => PrimitiveTransaction::Eip2930(TxEip2930 {
                chain_id: tx.chain_id.ok_or_else(|| missing("chainId"))?,
                nonce: tx.nonce,
                gas_price: tx.gas_price.ok_or_else(|| missing("gasPrice"))?,
                gas_limit: tx.gas,
                to: tx.to.into(),
                value: tx.value,
                access_list: tx.access_list.unwrap_or_default(),
                input: tx.input,
            }),
            TxType::Eip1559 => PrimitiveTransaction::Eip1559(TxEip1559 {
                chain_id: tx.chain_id.ok_or_else(|| missing("chainId"))?,
                nonce: tx.nonce,
                gas_limit: tx.gas,
                max_fee_per_gas: tx.max_fee_per_gas.ok_or_else(|| missing("maxFeePerGas"))?,
                max_priority_fee_per_gas: tx
                    .max_priority_fee_per_gas
                    .ok_or_else(|| missing("maxPriorityFeePerGas"))?,
                to: tx.to.into(),
                value: tx.value,
                access_list: tx.access_list.unwrap_or_default(),
                input: tx.input,
            }),
        };

        let signed = TransactionSigned::new(transaction, tx.signature.into(), tx.hash);
        Ok(Self {
            transaction: signed.with_signer(tx.from),
            context: BlockContext {
                block_hash: tx.block_hash,
                block_number: tx.block_number,
                transaction_index: tx.transaction_index,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use blade_primitives::{Address, TxKind, U256};

    const PENDING_LEGACY: &str = r#"{"nonce":"0x4","gasPrice":"0x14","gas":"0xc350","to":null,"value":"0x0","input":"0x6080","v":"0x1b","r":"0x1","s":"0x2","hash":"0x00000000000000000000000000000000000000000000000000000000000000aa","from":"0x00000000000000000000000000000000000000bb","blockHash":null,"blockNumber":null,"transactionIndex":null,"type":"0x0"}"#;

    #[test]
    fn parse_pending_legacy() {
        let parsed = TransactionWithContext::from_json(PENDING_LEGACY.as_bytes()).unwrap();
        assert_eq!(parsed.context, BlockContext::default());

        let tx = &parsed.transaction;
        assert_eq!(tx.signer(), Address::with_last_byte(0xbb));
        assert_eq!(tx.nonce(), 4);
        assert_eq!(tx.gas_price(), Some(U256::from(20)));
        assert_eq!(tx.gas_limit(), 50_000);
        assert_eq!(tx.kind(), &TxKind::Create);
        assert_eq!(tx.signature.v, U256::from(27));
    }

    #[test]
    fn missing_fee_cap() {
        let tx = Transaction {
            transaction_type: 2,
            chain_id: Some(1),
            max_priority_fee_per_gas: Some(U256::from(1)),
            ..Default::default()
        };
        assert_matches!(
            TransactionWithContext::try_from(tx),
            Err(ConversionError::MissingField { field: "maxFeePerGas", tx_type: 2 })
        );
    }

    #[test]
    fn unknown_type() {
        let tx = Transaction { transaction_type: 3, ..Default::default() };
        assert_matches!(
            TransactionWithContext::try_from(tx),
            Err(ConversionError::UnknownTxType(UnknownTxType(3)))
        );
    }

    #[test]
    fn malformed_json() {
        assert_matches!(
            TransactionWithContext::from_json(br#"{"nonce":"0xzz"}"#),
            Err(ConversionError::Json(_))
        );
    }
}
