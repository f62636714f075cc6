use crate::{Address, B256};
use serde::{Deserialize, Serialize};

/// A list of addresses and storage keys that the transaction plans to access.
/// Accesses outside the list are possible, but become more expensive.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessListItem {
    /// Account addresses that would be loaded at the start of execution
    pub address: Address,
    /// Keys of storage that would be loaded at the start of execution
    pub storage_keys: Vec<B256>,
}

/// AccessList as defined in EIP-2930
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessList(pub Vec<AccessListItem>);

impl AccessList {
    /// Returns `true` if the list has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<AccessListItem>> for AccessList {
    fn from(items: Vec<AccessListItem>) -> Self {
        Self(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_access_list() {
        let list = AccessList(vec![AccessListItem {
            address: Address::with_last_byte(1),
            storage_keys: vec![B256::with_last_byte(2)],
        }]);
        let s = serde_json::to_string(&list).unwrap();
        assert_eq!(
            s,
            r#"[{"address":"0x0000000000000000000000000000000000000001","storageKeys":["0x0000000000000000000000000000000000000000000000000000000000000002"]}]"#
        );
        assert_eq!(serde_json::from_str::<AccessList>(&s).unwrap(), list);
    }
}
