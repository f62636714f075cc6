/// Returned when a transaction type identifier is not supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unsupported transaction type: {0}")]
pub struct UnknownTxType(pub u64);
