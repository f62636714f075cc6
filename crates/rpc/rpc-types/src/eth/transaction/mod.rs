pub use access_list::AccessListWithGasUsed;
pub use receipt::TransactionReceipt;
pub use request::TransactionRequest;
pub use sign::SignTransactionResult;
pub use signature::Signature;

use blade_primitives::{
    serde_helper::{hex_bytes, quantity},
    AccessList, Address, BlockHash, BlockNumber, Bytes, TxHash, U256,
};
use serde::{Deserialize, Serialize};

mod access_list;
mod receipt;
mod request;
mod sign;
mod signature;

/// Transaction object used in RPC
///
/// Block linkage fields are `null` for transactions that are not mined yet. Fee market fields,
/// the chain id and the access list are left out entirely when the transaction does not carry
/// them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Nonce
    #[serde(with = "quantity::u64_hex")]
    pub nonce: u64,
    /// Gas Price
    #[serde(default, skip_serializing_if = "Option::is_none", with = "quantity::u256_hex_opt")]
    pub gas_price: Option<U256>,
    /// The miner's tip.
    #[serde(default, skip_serializing_if = "Option::is_none", with = "quantity::u256_hex_opt")]
    pub max_priority_fee_per_gas: Option<U256>,
    /// Max BaseFeePerGas the user is willing to pay.
    #[serde(default, skip_serializing_if = "Option::is_none", with = "quantity::u256_hex_opt")]
    pub max_fee_per_gas: Option<U256>,
    /// Gas amount
    #[serde(with = "quantity::u64_hex")]
    pub gas: u64,
    /// Recipient, `null` for contract creation
    #[serde(default)]
    pub to: Option<Address>,
    /// Transferred value
    #[serde(with = "quantity::u256_hex")]
    pub value: U256,
    /// Data
    #[serde(with = "hex_bytes::bytes")]
    pub input: Bytes,
    /// All _flattened_ fields of the transaction signature.
    #[serde(flatten)]
    pub signature: Signature,
    /// Hash
    pub hash: TxHash,
    /// Sender
    pub from: Address,
    /// Block hash
    #[serde(default)]
    pub block_hash: Option<BlockHash>,
    /// Block number
    #[serde(default, with = "quantity::u64_hex_opt")]
    pub block_number: Option<BlockNumber>,
    /// Transaction Index
    #[serde(default, with = "quantity::u64_hex_opt")]
    pub transaction_index: Option<u64>,
    /// The chain id of the transaction, if any.
    #[serde(default, skip_serializing_if = "Option::is_none", with = "quantity::u64_hex_opt")]
    pub chain_id: Option<u64>,
    /// EIP2718
    ///
    /// Transaction type, 2 for EIP-1559 transaction, 1 for AccessList transaction, 0 for Legacy
    #[serde(rename = "type", with = "quantity::u64_hex")]
    pub transaction_type: u64,
    /// EIP2930
    ///
    /// Pre-pay to warm storage access.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_list: Option<AccessList>,
}

impl Transaction {
    /// Returns `true` if the transaction is included in a block.
    pub const fn is_mined(&self) -> bool {
        self.block_hash.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blade_primitives::{AccessListItem, B256};

    fn mined_legacy() -> Transaction {
        Transaction {
            nonce: 2,
            gas_price: Some(U256::from(9)),
            gas: 10,
            to: Some(Address::with_last_byte(7)),
            value: U256::from(8),
            input: Bytes::from(vec![11, 12, 13]),
            signature: Signature { v: U256::from(27), r: U256::from(14), s: U256::from(15) },
            hash: B256::with_last_byte(1),
            from: Address::with_last_byte(6),
            block_hash: Some(B256::with_last_byte(3)),
            block_number: Some(4),
            transaction_index: Some(5),
            chain_id: None,
            transaction_type: 0,
            access_list: None,
            ..Default::default()
        }
    }

    #[test]
    fn serde_mined_transaction() {
        let transaction = mined_legacy();
        let serialized = serde_json::to_string(&transaction).unwrap();
        assert_eq!(
            serialized,
            r#"{"nonce":"0x2","gasPrice":"0x9","gas":"0xa","to":"0x0000000000000000000000000000000000000007","value":"0x8","input":"0x0b0c0d","v":"0x1b","r":"0xe","s":"0xf","hash":"0x0000000000000000000000000000000000000000000000000000000000000001","from":"0x0000000000000000000000000000000000000006","blockHash":"0x0000000000000000000000000000000000000000000000000000000000000003","blockNumber":"0x4","transactionIndex":"0x5","type":"0x0"}"#
        );
        let deserialized: Transaction = serde_json::from_str(&serialized).unwrap();
        assert_eq!(transaction, deserialized);
    }

    #[test]
    fn serde_pending_dynamic_fee_transaction() {
        let transaction = Transaction {
            gas_price: Some(U256::from(30)),
            max_priority_fee_per_gas: Some(U256::from(2)),
            max_fee_per_gas: Some(U256::from(30)),
            to: None,
            input: Bytes::new(),
            block_hash: None,
            block_number: None,
            transaction_index: None,
            chain_id: Some(100),
            transaction_type: 2,
            access_list: Some(AccessList(vec![AccessListItem {
                address: Address::with_last_byte(1),
                storage_keys: vec![B256::ZERO],
            }])),
            ..mined_legacy()
        };
        let serialized = serde_json::to_string(&transaction).unwrap();
        assert!(serialized.contains(r#""maxPriorityFeePerGas":"0x2","maxFeePerGas":"0x1e""#));
        assert!(serialized.contains(r#""to":null"#));
        assert!(serialized.contains(r#""input":"0x""#));
        assert!(serialized.contains(
            r#""blockHash":null,"blockNumber":null,"transactionIndex":null,"chainId":"0x64","type":"0x2","accessList":[{"address":"#
        ));
        assert!(!transaction.is_mined());

        let deserialized: Transaction = serde_json::from_str(&serialized).unwrap();
        assert_eq!(transaction, deserialized);
    }

    #[test]
    fn deserialize_without_block_fields() {
        let json = r#"{"nonce":"0x1","gas":"0x5208","value":"0x0","input":"0x","v":"0x0","r":"0x1","s":"0x2","hash":"0x0000000000000000000000000000000000000000000000000000000000000001","from":"0x0000000000000000000000000000000000000006","type":"0x0"}"#;
        let transaction: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(transaction.gas, 21_000);
        assert_eq!(transaction.to, None);
        assert_eq!(transaction.block_number, None);
        assert_eq!(transaction.gas_price, None);
    }
}
