//! Mock chain state and gas estimator for testing request resolution.

use crate::{
    error::{EthApiError, EthResult, ProviderError, ProviderResult},
    provider::{ChainAccessor, GasEstimator},
};
use blade_primitives::{Address, BlockNumber, ForkCondition, ForkSchedule, Hardfork, Header, U256};
use blade_rpc_types::TransactionRequest;
use parking_lot::Mutex;
use std::{collections::HashMap, sync::Arc};

/// A [`ChainAccessor`] backed by in-memory values.
///
/// Clones share the head header and the nonces.
#[derive(Debug, Clone)]
pub struct MockChain {
    head: Arc<Mutex<Header>>,
    forks: ForkSchedule,
    nonces: Arc<Mutex<HashMap<Address, u64>>>,
    average_gas_price: U256,
    priority_fee: Option<U256>,
}

// === impl MockChain ===

impl MockChain {
    /// A chain with the fee market active from genesis and a head with the given base fee.
    pub fn london(base_fee: u64) -> Self {
        let head = Header { number: 1, base_fee_per_gas: base_fee, ..Default::default() };
        Self::with_forks(ForkSchedule::all_at_genesis(), head)
    }

    /// A chain where London never activates.
    pub fn pre_london() -> Self {
        let forks =
            ForkSchedule::all_at_genesis().with_fork(Hardfork::London, ForkCondition::Never);
        Self::with_forks(forks, Header { number: 1, ..Default::default() })
    }

    /// A chain with the given fork schedule and head.
    pub fn with_forks(forks: ForkSchedule, head: Header) -> Self {
        Self {
            head: Arc::new(Mutex::new(head)),
            forks,
            nonces: Default::default(),
            average_gas_price: U256::ZERO,
            priority_fee: Some(U256::from(1)),
        }
    }

    /// Sets the average gas price.
    pub const fn with_average_gas_price(mut self, price: U256) -> Self {
        self.average_gas_price = price;
        self
    }

    /// Sets the suggested priority fee, `None` makes the suggestion fail.
    pub const fn with_priority_fee(mut self, fee: Option<U256>) -> Self {
        self.priority_fee = fee;
        self
    }

    /// Sets the next nonce of `address`.
    pub fn set_nonce(&self, address: Address, nonce: u64) {
        self.nonces.lock().insert(address, nonce);
    }

    /// Replaces the head header.
    pub fn set_head(&self, head: Header) {
        *self.head.lock() = head;
    }
}

impl ChainAccessor for MockChain {
    fn current_header(&self) -> ProviderResult<Header> {
        Ok(self.head.lock().clone())
    }

    fn is_fork_active(&self, fork: Hardfork, block: BlockNumber) -> bool {
        self.forks.is_fork_active(fork, block)
    }

    fn nonce_of(&self, address: Address) -> u64 {
        self.nonces.lock().get(&address).copied().unwrap_or_default()
    }

    fn average_gas_price(&self) -> U256 {
        self.average_gas_price
    }

    fn suggested_priority_fee(&self) -> ProviderResult<U256> {
        self.priority_fee.ok_or(ProviderError::PriorityFeeUnavailable)
    }
}

/// A [`GasEstimator`] that returns a fixed estimate and records the requests it saw.
#[derive(Debug, Clone, Default)]
pub struct MockGasEstimator {
    estimate: Option<U256>,
    calls: Arc<Mutex<Vec<TransactionRequest>>>,
}

// === impl MockGasEstimator ===

impl MockGasEstimator {
    /// An estimator that always returns `estimate`.
    pub fn fixed(estimate: U256) -> Self {
        Self { estimate: Some(estimate), ..Default::default() }
    }

    /// An estimator that always fails.
    pub fn failing() -> Self {
        Self::default()
    }

    /// Returns the requests passed to the estimator so far.
    pub fn calls(&self) -> Vec<TransactionRequest> {
        self.calls.lock().clone()
    }
}

impl GasEstimator for MockGasEstimator {
    fn estimate_gas(&self, request: TransactionRequest) -> EthResult<U256> {
        self.calls.lock().push(request);
        self.estimate.ok_or_else(|| EthApiError::EvmCustom("execution reverted".to_string()))
    }
}
