use crate::json;
use blade_primitives::{
    serde_helper::{hex_bytes::HexBytes, Quantity},
    AccessList, Address, Bytes, ChainId, U256,
};
use serde::{ser::SerializeMap, Serialize, Serializer};

/// A fully resolved call, used to drive simulated or real execution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallMsg {
    /// The sender of the call.
    pub from: Address,
    /// The destination, `None` for contract creation.
    pub to: Option<Address>,
    /// Gas limit, `0` leaves the limit up to the executor.
    pub gas: u64,
    /// Legacy gas price.
    pub gas_price: Option<U256>,
    /// EIP-1559 fee cap per gas.
    pub max_fee_per_gas: Option<U256>,
    /// EIP-1559 tip per gas.
    pub max_priority_fee_per_gas: Option<U256>,
    /// Amount of wei sent along with the call.
    pub value: Option<U256>,
    /// Input data, usually an ABI-encoded contract method invocation.
    pub data: Bytes,
    /// EIP-2718 type.
    pub transaction_type: u64,
    /// EIP-2930 access list.
    pub access_list: Option<AccessList>,
    /// Chain id.
    pub chain_id: Option<ChainId>,
    /// Sender nonce.
    pub nonce: u64,
}

// === impl CallMsg ===

impl CallMsg {
    /// Encodes the call as a JSON object through the pooled encoder.
    pub fn encode(&self) -> serde_json::Result<Vec<u8>> {
        json::encode(self)
    }

    /// Writes the present fields into `map`.
    ///
    /// `from`, `nonce` and `type` are always written, the remaining fields only when set.
    fn write_fields<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error> {
        map.serialize_entry("from", &self.from)?;
        if self.gas != 0 {
            map.serialize_entry("gas", &Quantity(self.gas))?;
        }
        if let Some(to) = &self.to {
            map.serialize_entry("to", to)?;
        }
        if !self.data.is_empty() {
            map.serialize_entry("data", &HexBytes(&self.data))?;
        }
        if let Some(gas_price) = self.gas_price {
            map.serialize_entry("gasPrice", &Quantity(gas_price))?;
        }
        if let Some(value) = self.value {
            map.serialize_entry("value", &Quantity(value))?;
        }
        if let Some(max_fee) = self.max_fee_per_gas {
            map.serialize_entry("maxFeePerGas", &Quantity(max_fee))?;
        }
        if let Some(tip) = self.max_priority_fee_per_gas {
            map.serialize_entry("maxPriorityFeePerGas", &Quantity(tip))?;
        }
        if let Some(access_list) = &self.access_list {
            map.serialize_entry("accessList", access_list)?;
        }
        if let Some(chain_id) = self.chain_id {
            map.serialize_entry("chainID", &Quantity(chain_id))?;
        }
        map.serialize_entry("nonce", &Quantity(self.nonce))?;
        map.serialize_entry("type", &Quantity(self.transaction_type))
    }
}

impl Serialize for CallMsg {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        self.write_fields(&mut map)?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blade_primitives::AccessListItem;

    #[test]
    fn minimal_call() {
        let msg = CallMsg { from: Address::with_last_byte(1), ..Default::default() };
        assert_eq!(
            String::from_utf8(msg.encode().unwrap()).unwrap(),
            r#"{"from":"0x0000000000000000000000000000000000000001","nonce":"0x0","type":"0x0"}"#
        );
    }

    #[test]
    fn full_call() {
        let msg = CallMsg {
            from: Address::with_last_byte(1),
            to: Some(Address::with_last_byte(2)),
            gas: 21_000,
            gas_price: None,
            max_fee_per_gas: Some(U256::from(202)),
            max_priority_fee_per_gas: Some(U256::from(2)),
            value: Some(U256::ZERO),
            data: Bytes::from(vec![0xde, 0xad]),
            transaction_type: 2,
            access_list: Some(AccessList(vec![AccessListItem {
                address: Address::with_last_byte(3),
                storage_keys: vec![],
            }])),
            chain_id: Some(100),
            nonce: 7,
        };
        let expected = concat!(
            r#"{"from":"0x0000000000000000000000000000000000000001","gas":"0x5208","#,
            r#""to":"0x0000000000000000000000000000000000000002","data":"0xdead","#,
            r#""value":"0x0","maxFeePerGas":"0xca","maxPriorityFeePerGas":"0x2","#,
            r#""accessList":[{"address":"0x0000000000000000000000000000000000000003","storageKeys":[]}],"#,
            r#""chainID":"0x64","nonce":"0x7","type":"0x2"}"#
        );
        assert_eq!(String::from_utf8(msg.encode().unwrap()).unwrap(), expected);
        assert_eq!(serde_json::to_string(&msg).unwrap(), expected);
    }

    #[test]
    fn zero_gas_price_is_still_written() {
        let msg = CallMsg { gas_price: Some(U256::ZERO), ..Default::default() };
        let value: serde_json::Value = serde_json::from_slice(&msg.encode().unwrap()).unwrap();
        assert_eq!(value["gasPrice"], "0x0");
        assert!(value.get("gas").is_none());
        assert!(value.get("data").is_none());
    }
}
