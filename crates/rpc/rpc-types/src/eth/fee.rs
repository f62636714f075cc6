use blade_primitives::serde_helper::Quantity;
use serde::{Deserialize, Serialize};

/// Response type for `eth_feeHistory`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "FeeHistoryRepr", into = "FeeHistoryRepr")]
pub struct FeeHistory {
    /// Lowest number block of the returned range.
    pub oldest_block: u64,
    /// An array of block base fees per gas.
    ///
    /// This includes the next block after the newest of the returned range, because this value
    /// can be derived from the newest block. Empty for blocks without a base fee.
    pub base_fee_per_gas: Vec<u64>,
    /// An array of block gas used ratios. These are calculated as the ratio of `gasUsed` and
    /// `gasLimit`.
    pub gas_used_ratio: Vec<f64>,
    /// An (optional) array of effective priority fee per gas data points from a single block.
    pub reward: Option<Vec<Vec<u64>>>,
}

/// Wire form of [`FeeHistory`], every number is a quantity.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FeeHistoryRepr {
    oldest_block: Quantity<u64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    base_fee_per_gas: Vec<Quantity<u64>>,
    gas_used_ratio: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    reward: Option<Vec<Vec<Quantity<u64>>>>,
}

impl From<FeeHistoryRepr> for FeeHistory {
    fn from(repr: FeeHistoryRepr) -> Self {
        Self {
            oldest_block: repr.oldest_block.0,
            base_fee_per_gas: repr.base_fee_per_gas.into_iter().map(|fee| fee.0).collect(),
            gas_used_ratio: repr.gas_used_ratio,
            reward: repr.reward.map(|reward| {
                reward.into_iter().map(|block| block.into_iter().map(|q| q.0).collect()).collect()
            }),
        }
    }
}

impl From<FeeHistory> for FeeHistoryRepr {
    fn from(history: FeeHistory) -> Self {
        Self {
            oldest_block: Quantity(history.oldest_block),
            base_fee_per_gas: history.base_fee_per_gas.into_iter().map(Quantity).collect(),
            gas_used_ratio: history.gas_used_ratio,
            reward: history.reward.map(|reward| {
                reward.into_iter().map(|block| block.into_iter().map(Quantity).collect()).collect()
            }),
        }
    }
}
