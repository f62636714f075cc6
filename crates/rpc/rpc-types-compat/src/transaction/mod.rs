//! Compatibility functions for rpc `Transaction` type.

use blade_primitives::{BlockHash, BlockNumber, Header, TransactionSignedEcRecovered, TxType};
use blade_rpc_types::Transaction;
pub use typed::*;

mod typed;

/// Create a new rpc transaction result for a mined transaction, using the given block hash,
/// number, and tx index fields to populate the corresponding fields in the rpc result.
///
/// The block hash, number, base fee and tx index should be from the original block where the
/// transaction was mined.
pub fn from_recovered_with_block_context(
    tx: TransactionSignedEcRecovered,
    block_hash: BlockHash,
    block_number: BlockNumber,
    base_fee: u64,
    tx_index: usize,
) -> Transaction {
    fill(tx, Some(MinedContext { block_hash, block_number, base_fee, tx_index: Some(tx_index) }))
}

/// Create a new rpc transaction result for a _pending_ signed transaction, setting block
/// environment related fields to `None`.
pub fn from_recovered(tx: TransactionSignedEcRecovered) -> Transaction {
    fill(tx, None)
}

/// Create a new rpc transaction result, for a mined transaction if the including block's header
/// is given and for a pending one otherwise.
///
/// Without a `tx_index` the transaction index is reported as `null`, the block fields are still
/// filled in from the header.
pub fn from_transaction(
    tx: TransactionSignedEcRecovered,
    header: Option<&Header>,
    tx_index: Option<usize>,
) -> Transaction {
    let mined = header.map(|header| MinedContext {
        block_hash: header.hash,
        block_number: header.number,
        base_fee: header.base_fee_per_gas,
        tx_index,
    });
    fill(tx, mined)
}

/// Block environment of a mined transaction.
struct MinedContext {
    block_hash: BlockHash,
    block_number: BlockNumber,
    base_fee: u64,
    tx_index: Option<usize>,
}

fn fill(tx: TransactionSignedEcRecovered, mined: Option<MinedContext>) -> Transaction {
    let signer = tx.signer();
    let signed_tx = tx.into_signed();

    // mined transactions report the price they paid, pending ones the price they offer
    let mut gas_price = match &mined {
        Some(mined) => Some(signed_tx.effective_gas_price(mined.base_fee)),
        None => signed_tx.gas_price(),
    };

    let (max_fee_per_gas, max_priority_fee_per_gas) = match signed_tx.tx_type() {
        TxType::Legacy | TxType::Eip2930 => (None, None),
        TxType::Eip1559 => {
            let max_fee_per_gas = signed_tx.max_fee_per_gas();
            if gas_price.is_none() {
                gas_price = max_fee_per_gas;
            }
            (max_fee_per_gas, signed_tx.max_priority_fee_per_gas())
        }
    };

    let access_list = signed_tx.access_list().filter(|list| !list.is_empty()).cloned();

    Transaction {
        nonce: signed_tx.nonce(),
        gas_price,
        max_priority_fee_per_gas,
        max_fee_per_gas,
        gas: signed_tx.gas_limit(),
        to: signed_tx.to(),
        value: signed_tx.value(),
        input: signed_tx.input().clone(),
        signature: signed_tx.signature.into(),
        hash: signed_tx.hash(),
        from: signer,
        block_hash: mined.as_ref().map(|mined| mined.block_hash),
        block_number: mined.as_ref().map(|mined| mined.block_number),
        transaction_index: mined.as_ref().and_then(|mined| mined.tx_index).map(|idx| idx as u64),
        chain_id: signed_tx.chain_id(),
        transaction_type: signed_tx.tx_type().into(),
        access_list,
    }
}
