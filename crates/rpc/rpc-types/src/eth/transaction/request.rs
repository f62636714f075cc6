use crate::CallMsg;
use blade_primitives::{
    serde_helper::{hex_bytes, quantity},
    AccessList, Address, Bytes, ChainId, TxType, U256,
};
use serde::{Deserialize, Serialize};

/// Represents _all_ transaction requests received from RPC
///
/// Every field is optional. Fields left unset are filled in before the request is executed or
/// signed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TransactionRequest {
    /// from address
    pub from: Option<Address>,
    /// to address
    pub to: Option<Address>,
    /// Supplied gas
    #[serde(with = "quantity::u64_hex_opt")]
    pub gas: Option<u64>,
    /// legacy, gas Price
    #[serde(skip_serializing_if = "Option::is_none", with = "quantity::u256_hex_opt")]
    pub gas_price: Option<U256>,
    /// max priority fee per gas, the tip paid to the block author
    #[serde(skip_serializing_if = "Option::is_none", with = "quantity::u256_hex_opt")]
    pub max_priority_fee_per_gas: Option<U256>,
    /// max fee per gas, the cap the sender is willing to pay
    #[serde(skip_serializing_if = "Option::is_none", with = "quantity::u256_hex_opt")]
    pub max_fee_per_gas: Option<U256>,
    /// value of th tx in wei
    #[serde(with = "quantity::u256_hex_opt")]
    pub value: Option<U256>,
    /// Any additional data sent
    #[serde(with = "hex_bytes::bytes_opt")]
    pub data: Option<Bytes>,
    /// Calldata under its newer name, takes precedence over `data`
    #[serde(with = "hex_bytes::bytes_opt")]
    pub input: Option<Bytes>,
    /// Transaction nonce
    #[serde(with = "quantity::u64_hex_opt")]
    pub nonce: Option<u64>,
    /// EIP-2718 type
    #[serde(rename = "type", with = "quantity::u64_hex_opt")]
    pub transaction_type: Option<u64>,
    /// warm storage access pre-payment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_list: Option<AccessList>,
    /// chain id
    #[serde(skip_serializing_if = "Option::is_none", with = "quantity::u64_hex_opt")]
    pub chain_id: Option<ChainId>,
}

// === impl TransactionRequest ===

impl TransactionRequest {
    /// Returns the calldata, `input` is preferred over `data` when both are set.
    pub const fn calldata(&self) -> Option<&Bytes> {
        match (&self.input, &self.data) {
            (Some(input), _) => Some(input),
            (None, data) => data.as_ref(),
        }
    }

    /// Returns the configured fee cap, if any.
    ///
    /// The returns `gas_price` (legacy) if set or `max_fee_per_gas` (EIP1559)
    pub fn fee_cap(&self) -> Option<U256> {
        self.gas_price.or(self.max_fee_per_gas)
    }

    /// Returns `true` if either of the fee market fields is set.
    pub const fn has_fee_market_fields(&self) -> bool {
        self.max_fee_per_gas.is_some() || self.max_priority_fee_per_gas.is_some()
    }

    /// Sets the transaction type to a dynamic fee transaction.
    pub fn set_dynamic_fee_type(&mut self) {
        self.transaction_type = Some(TxType::Eip1559.into());
    }

    /// Converts a fully resolved request into a [`CallMsg`].
    ///
    /// Returns `None` if the nonce or the gas limit are still unset. A missing sender becomes the
    /// zero address and a missing type becomes the legacy type.
    pub fn into_call_msg(self) -> Option<CallMsg> {
        let data = self.calldata().cloned().unwrap_or_default();
        Some(CallMsg {
            from: self.from.unwrap_or_default(),
            to: self.to,
            gas: self.gas?,
            gas_price: self.gas_price,
            max_fee_per_gas: self.max_fee_per_gas,
            max_priority_fee_per_gas: self.max_priority_fee_per_gas,
            value: self.value,
            data,
            transaction_type: self.transaction_type.unwrap_or_default(),
            access_list: self.access_list,
            chain_id: self.chain_id,
            nonce: self.nonce?,
        })
    }
}
