use blade_primitives::{serde_helper::quantity, AccessList};
use serde::{Deserialize, Serialize};

/// Access list with gas used appended.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessListWithGasUsed {
    /// List with accounts accessed during transaction.
    pub access_list: AccessList,
    /// Error message if the transaction failed while the list was being generated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Estimated gas used with access list.
    #[serde(with = "quantity::u64_hex")]
    pub gas_used: u64,
}
