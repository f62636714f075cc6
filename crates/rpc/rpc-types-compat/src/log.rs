//! Compatibility functions for rpc `Log` type.

use blade_primitives::{Header, Log as PrimitiveLog, TxHash};
use blade_rpc_types::Log;

/// Creates the rpc logs of a transaction.
///
/// Logs are numbered within the block starting at `base_log_index`, so the caller passes the
/// number of logs emitted by the preceding transactions of the block.
pub fn from_logs(
    logs: &[PrimitiveLog],
    base_log_index: u64,
    tx_index: u64,
    header: &Header,
    tx_hash: TxHash,
) -> Vec<Log> {
    logs.iter()
        .zip(base_log_index..)
        .map(|(log, log_index)| from_log(log, log_index, tx_index, header, tx_hash))
        .collect()
}

/// Creates an rpc log, stamping it with its position in the chain.
pub fn from_log(
    log: &PrimitiveLog,
    log_index: u64,
    tx_index: u64,
    header: &Header,
    tx_hash: TxHash,
) -> Log {
    Log {
        address: log.address,
        topics: log.topics.clone(),
        data: log.data.clone(),
        block_number: header.number,
        transaction_hash: tx_hash,
        transaction_index: tx_index,
        block_hash: header.hash,
        log_index,
        removed: false,
    }
}
