//! Implementation specific Errors for the `eth_` namespace.

use crate::result::{internal_rpc_err, invalid_params_rpc_err, rpc_err, INVALID_INPUT_CODE};
use blade_primitives::{Address, ChainId, U256};
use jsonrpsee_types::error::ErrorObject;

/// Result alias
pub type EthResult<T> = Result<T, EthApiError>;

/// Result alias for chain state lookups.
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Errors raised by the chain state accessor.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    /// The current head header is not available.
    #[error("header not found")]
    HeaderNotFound,
    /// No priority fee suggestion can be made.
    #[error("priority fee suggestion unavailable")]
    PriorityFeeUnavailable,
    /// Any other storage failure.
    #[error("{0}")]
    Other(String),
}

/// Errors that can occur when interacting with the `eth_` namespace
#[derive(Debug, thiserror::Error)]
pub enum EthApiError {
    /// The request is malformed.
    #[error("{0}")]
    InvalidParams(String),
    /// The request describes a transaction that can't be valid.
    #[error(transparent)]
    InvalidTransaction(#[from] RpcInvalidTransactionError),
    /// The chain id of the request differs from the node's.
    #[error("chainId does not match node's (have={have}, want={want})")]
    ChainIdMismatch {
        /// Chain id of the request.
        have: ChainId,
        /// Chain id of the node.
        want: ChainId,
    },
    /// The gas estimator returned a value that is not a usable gas limit.
    #[error("estimated gas not a uint64: {0}")]
    InvalidGasEstimate(U256),
    /// A request was used before its nonce and gas limit were filled in.
    #[error("transaction request is not fully resolved")]
    UnresolvedRequest,
    /// Thrown when an account override sets both `state` and `stateDiff`.
    #[error("account {0} has both 'state' and 'stateDiff'")]
    BothStateAndStateDiffInOverride(Address),
    /// Evm generic purpose error.
    #[error("{0}")]
    EvmCustom(String),
    /// Error while reading chain state.
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl From<EthApiError> for ErrorObject<'static> {
    fn from(error: EthApiError) -> Self {
        match error {
            EthApiError::InvalidParams(_) |
            EthApiError::UnresolvedRequest |
            EthApiError::BothStateAndStateDiffInOverride(_) => {
                invalid_params_rpc_err(error.to_string())
            }
            EthApiError::InvalidTransaction(err) => err.into(),
            EthApiError::ChainIdMismatch { .. } => {
                rpc_err(INVALID_INPUT_CODE, error.to_string(), None)
            }
            EthApiError::InvalidGasEstimate(_) |
            EthApiError::EvmCustom(_) |
            EthApiError::Provider(_) => internal_rpc_err(error.to_string()),
        }
    }
}

/// An error due to invalid transaction.
///
/// These are the fee specification errors of a request, they are always reported and never
/// corrected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RpcInvalidTransactionError {
    /// Both a legacy gas price and fee market fields were set.
    #[error("both gasPrice and (maxFeePerGas or maxPriorityFeePerGas) specified")]
    ConflictingFeeFieldsInRequest,
    /// The fee cap of a fully specified fee market request is zero.
    #[error("maxFeePerGas must be non-zero")]
    ZeroFeeCap,
    /// A zero legacy gas price once the fee market is active.
    #[error("gasPrice must be non-zero after london fork")]
    GasPriceZeroAfterLondon,
    /// Thrown when the tip exceeds the fee cap.
    #[error("maxFeePerGas ({max_fee_per_gas}) < maxPriorityFeePerGas ({max_priority_fee_per_gas})")]
    TipAboveFeeCap {
        /// The fee cap.
        max_fee_per_gas: U256,
        /// The tip.
        max_priority_fee_per_gas: U256,
    },
    /// Fee market fields were set before the fee market is active.
    #[error("maxFeePerGas and maxPriorityFeePerGas are not valid before London is active")]
    FeeMarketFieldsBeforeLondon,
}

impl From<RpcInvalidTransactionError> for ErrorObject<'static> {
    fn from(err: RpcInvalidTransactionError) -> Self {
        rpc_err(INVALID_INPUT_CODE, err.to_string(), None)
    }
}
