//! Additional helpers for converting errors.

use jsonrpsee_types::error::{ErrorObject, INTERNAL_ERROR_CODE, INVALID_PARAMS_CODE};

/// Error code geth uses for requests that describe an invalid transaction.
pub const INVALID_INPUT_CODE: i32 = -32000;

/// Constructs an invalid params JSON-RPC error.
pub fn invalid_params_rpc_err(msg: impl Into<String>) -> ErrorObject<'static> {
    rpc_err(INVALID_PARAMS_CODE, msg, None)
}

/// Constructs an internal JSON-RPC error.
pub fn internal_rpc_err(msg: impl Into<String>) -> ErrorObject<'static> {
    rpc_err(INTERNAL_ERROR_CODE, msg, None)
}

/// Constructs a JSON-RPC error, consisting of `code`, `message` and optional `data`.
///
/// `data` is attached as a hex string.
pub fn rpc_err(code: i32, msg: impl Into<String>, data: Option<&[u8]>) -> ErrorObject<'static> {
    ErrorObject::owned(code, msg.into(), data.map(blade_primitives::hex::encode_prefixed))
}
