//! Types and logic supporting the `eth` namespace RPC handlers.
//!
//! The [`TransactionResolver`] fills in the unset fields of a
//! [`TransactionRequest`](blade_rpc_types::TransactionRequest) against the chain state exposed by
//! a [`ChainAccessor`]. Failures are reported as [`EthApiError`], which converts into a JSON-RPC
//! error object.

#![doc(issue_tracker_base_url = "https://github.com/blade-chain/blade-rpc/issues/")]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

pub mod config;
pub mod error;
pub mod provider;
pub mod result;
pub mod state;
pub mod transaction;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::EthConfig;
pub use error::{
    EthApiError, EthResult, ProviderError, ProviderResult, RpcInvalidTransactionError,
};
pub use provider::{ChainAccessor, GasEstimator};
pub use state::validate_state_override;
pub use transaction::{parse_request, TransactionResolver};
