//! Interfaces to the chain state and the executor that requests are resolved against.

use crate::error::{EthResult, ProviderResult};
use blade_primitives::{Address, BlockNumber, Hardfork, Header, U256};
use blade_rpc_types::TransactionRequest;

/// Read access to the current chain state.
///
/// Implementations are expected to answer from memory or a read-through cache; no lock of the
/// caller is held across these calls.
#[auto_impl::auto_impl(&, Arc, Box)]
pub trait ChainAccessor: Send + Sync {
    /// Returns the header of the current head block.
    fn current_header(&self) -> ProviderResult<Header>;

    /// Returns `true` if `fork` is active at block `block`.
    fn is_fork_active(&self, fork: Hardfork, block: BlockNumber) -> bool;

    /// Returns the next nonce of `address`.
    fn nonce_of(&self, address: Address) -> u64;

    /// Returns the average gas price paid in recent blocks.
    fn average_gas_price(&self) -> U256;

    /// Returns the suggested priority fee for a new transaction.
    fn suggested_priority_fee(&self) -> ProviderResult<U256>;
}

/// Estimates the gas a call needs by simulating it.
#[auto_impl::auto_impl(&, Arc, Box)]
pub trait GasEstimator: Send + Sync {
    /// Simulates `request` and returns the gas it needs.
    fn estimate_gas(&self, request: TransactionRequest) -> EthResult<U256>;
}
