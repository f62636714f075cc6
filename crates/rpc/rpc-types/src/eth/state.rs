//! bindings for state overrides in eth_call

use crate::json;
use blade_primitives::{
    serde_helper::{hex_bytes, hex_bytes::HexBytes, quantity, Quantity},
    Address, Bytes, StorageKey, StorageValue, U256,
};
use serde::{ser::SerializeMap, Deserialize, Serialize, Serializer};
use std::{
    collections::HashMap,
    ops::{Deref, DerefMut},
};

/// A set of account overrides
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct StateOverride(pub HashMap<Address, AccountOverride>);

// === impl StateOverride ===

impl StateOverride {
    /// Encodes the overrides as a JSON object keyed by address, through the pooled encoder.
    pub fn encode(&self) -> serde_json::Result<Vec<u8>> {
        json::encode(self)
    }
}

impl Serialize for StateOverride {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (address, account) in &self.0 {
            map.serialize_entry(address, account)?;
        }
        map.end()
    }
}

impl Deref for StateOverride {
    type Target = HashMap<Address, AccountOverride>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for StateOverride {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<HashMap<Address, AccountOverride>> for StateOverride {
    fn from(overrides: HashMap<Address, AccountOverride>) -> Self {
        Self(overrides)
    }
}

impl FromIterator<(Address, AccountOverride)> for StateOverride {
    fn from_iter<I: IntoIterator<Item = (Address, AccountOverride)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Custom account override used in call
#[derive(Clone, Debug, PartialEq, Eq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AccountOverride {
    /// Fake nonce to set for the account before executing the call.
    #[serde(with = "quantity::u64_hex_opt")]
    pub nonce: Option<u64>,
    /// Fake EVM bytecode to inject into the account before executing the call.
    #[serde(with = "hex_bytes::bytes_opt")]
    pub code: Option<Bytes>,
    /// Fake balance to set for the account before executing the call.
    #[serde(with = "quantity::u256_hex_opt")]
    pub balance: Option<U256>,
    /// Fake key-value mapping to override all slots in the account storage before executing the
    /// call.
    pub state: Option<HashMap<StorageKey, StorageValue>>,
    /// Fake key-value mapping to override individual slots in the account storage before executing
    /// the call.
    pub state_diff: Option<HashMap<StorageKey, StorageValue>>,
}

// === impl AccountOverride ===

impl AccountOverride {
    /// Returns `true` if both a full storage replacement and a storage diff are set, which can't
    /// be applied together.
    pub const fn has_conflicting_storage(&self) -> bool {
        self.state.is_some() && self.state_diff.is_some()
    }

    fn write_fields<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error> {
        if let Some(nonce) = self.nonce {
            map.serialize_entry("nonce", &Quantity(nonce))?;
        }
        if let Some(balance) = self.balance {
            map.serialize_entry("balance", &Quantity(balance))?;
        }
        if let Some(code) = &self.code {
            map.serialize_entry("code", &HexBytes(code))?;
        }
        if let Some(state) = &self.state {
            map.serialize_entry("state", state)?;
        }
        if let Some(state_diff) = &self.state_diff {
            map.serialize_entry("stateDiff", state_diff)?;
        }
        Ok(())
    }
}

impl Serialize for AccountOverride {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        self.write_fields(&mut map)?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blade_primitives::B256;
    use serde_json::json;

    #[test]
    fn test_state_override() {
        let s = r#"{
            "0x0000000000000000000000000000000000000124": {
                "code": "0x1234"
            }
        }"#;
        let state_override: StateOverride = serde_json::from_str(s).unwrap();
        let address: Address = "0x0000000000000000000000000000000000000124".parse().unwrap();
        let acc = state_override.get(&address).unwrap();
        assert_eq!(acc.code, Some(Bytes::from(vec![0x12, 0x34])));
        assert!(acc.nonce.is_none());
    }

    #[test]
    fn encodes_only_present_fields() {
        let address = Address::with_last_byte(1);
        let overrides: StateOverride = [(
            address,
            AccountOverride {
                nonce: Some(1),
                balance: Some(U256::from(255)),
                state_diff: Some(HashMap::from([(
                    B256::with_last_byte(1),
                    B256::with_last_byte(2),
                )])),
                ..Default::default()
            },
        )]
        .into_iter()
        .collect();

        let encoded = overrides.encode().unwrap();
        let value: serde_json::Value = serde_json::from_slice(&encoded).unwrap();
        assert_eq!(
            value,
            json!({
                "0x0000000000000000000000000000000000000001": {
                    "nonce": "0x1",
                    "balance": "0xff",
                    "stateDiff": {
                        "0x0000000000000000000000000000000000000000000000000000000000000001":
                            "0x0000000000000000000000000000000000000000000000000000000000000002"
                    }
                }
            })
        );
        assert_eq!(serde_json::to_vec(&overrides).unwrap(), encoded);
    }

    #[test]
    fn empty_account_override() {
        let overrides: StateOverride =
            [(Address::ZERO, AccountOverride::default())].into_iter().collect();
        assert_eq!(
            String::from_utf8(overrides.encode().unwrap()).unwrap(),
            r#"{"0x0000000000000000000000000000000000000000":{}}"#
        );
        assert!(!overrides[&Address::ZERO].has_conflicting_storage());
    }

    #[test]
    fn encoded_overrides_parse_back() {
        let overrides: StateOverride = [(
            Address::with_last_byte(9),
            AccountOverride {
                code: Some(Bytes::from(vec![0x60, 0x00])),
                state: Some(HashMap::new()),
                state_diff: Some(HashMap::new()),
                ..Default::default()
            },
        )]
        .into_iter()
        .collect();
        let parsed: StateOverride = serde_json::from_slice(&overrides.encode().unwrap()).unwrap();
        assert_eq!(parsed, overrides);
        assert!(parsed[&Address::with_last_byte(9)].has_conflicting_storage());
    }
}
