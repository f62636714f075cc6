//! Configuration for `eth` namespace request handling.

use blade_primitives::ChainId;
use serde::{Deserialize, Serialize};

/// Default chain id of the node.
pub const DEFAULT_CHAIN_ID: ChainId = 100;

/// Default lower bound for the gas price suggested to legacy requests.
pub const DEFAULT_PRICE_LIMIT: u64 = 0;

/// Settings used when resolving transaction requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct EthConfig {
    /// Chain id requests are checked against and defaulted to.
    pub chain_id: ChainId,
    /// Minimum gas price filled into legacy requests before the fee market is active.
    pub price_limit: u64,
}

impl EthConfig {
    /// Configures the chain id.
    pub const fn with_chain_id(mut self, chain_id: ChainId) -> Self {
        self.chain_id = chain_id;
        self
    }

    /// Configures the gas price floor.
    pub const fn with_price_limit(mut self, price_limit: u64) -> Self {
        self.price_limit = price_limit;
        self
    }
}

impl Default for EthConfig {
    fn default() -> Self {
        Self { chain_id: DEFAULT_CHAIN_ID, price_limit: DEFAULT_PRICE_LIMIT }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_toml() {
        let config: EthConfig = toml::from_str("chain-id = 1\nprice-limit = 7").unwrap();
        assert_eq!(config, EthConfig::default().with_chain_id(1).with_price_limit(7));
    }

    #[test]
    fn defaults_for_missing_keys() {
        let config: EthConfig = toml::from_str("price-limit = 7").unwrap();
        assert_eq!(config.chain_id, DEFAULT_CHAIN_ID);
        assert_eq!(toml::from_str::<EthConfig>("").unwrap(), EthConfig::default());
    }

    #[test]
    fn toml_roundtrip() {
        let config = EthConfig::default().with_price_limit(1_000);
        let s = toml::to_string(&config).unwrap();
        assert_eq!(toml::from_str::<EthConfig>(&s).unwrap(), config);
    }
}
