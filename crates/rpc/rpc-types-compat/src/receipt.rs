//! Compatibility functions for rpc `TransactionReceipt` type.

use blade_primitives::{Header, Receipt, TransactionSignedEcRecovered};
use blade_rpc_types::{Log, TransactionReceipt};

/// Creates the rpc receipt of a mined transaction.
///
/// `logs` must already be stamped with their positions, see [`crate::log::from_logs`].
pub fn from_receipt(
    receipt: &Receipt,
    tx: &TransactionSignedEcRecovered,
    tx_index: u64,
    header: &Header,
    logs: Vec<Log>,
) -> TransactionReceipt {
    TransactionReceipt {
        root: receipt.root,
        cumulative_gas_used: receipt.cumulative_gas_used,
        logs_bloom: receipt.logs_bloom,
        logs,
        status: receipt.status_code(),
        transaction_hash: tx.hash(),
        transaction_index: tx_index,
        block_hash: header.hash,
        block_number: header.number,
        gas_used: receipt.gas_used,
        contract_address: receipt.contract_address,
        from: tx.signer(),
        to: tx.to(),
        transaction_type: tx.tx_type().into(),
    }
}
