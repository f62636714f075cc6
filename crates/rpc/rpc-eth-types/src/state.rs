//! Checks applied to state overrides before they reach the executor.

use crate::error::{EthApiError, EthResult};
use blade_rpc_types::state::StateOverride;

/// Rejects overrides that replace and patch the storage of the same account.
///
/// An account may either replace its whole storage with `state` or patch single slots with
/// `stateDiff`, never both.
pub fn validate_state_override(overrides: &StateOverride) -> EthResult<()> {
    match overrides.iter().find(|(_, account)| account.has_conflicting_storage()) {
        Some((address, _)) => Err(EthApiError::BothStateAndStateDiffInOverride(*address)),
        None => Ok(()),
    }
}
