//! Compatibility functions for rpc `Block` type.

use crate::transaction::from_recovered_with_block_context;
use blade_primitives::{Block as PrimitiveBlock, Header as PrimitiveHeader};
use blade_rpc_types::{Block, BlockTransactions, BlockTransactionsKind, Header};

/// Converts the given primitive block into a [`Block`] response with the given
/// [`BlockTransactionsKind`]
pub fn from_block(block: PrimitiveBlock, kind: BlockTransactionsKind) -> Block {
    match kind {
        BlockTransactionsKind::Hashes => from_block_with_tx_hashes(block),
        BlockTransactionsKind::Full => from_block_full(block),
    }
}

/// Create a new [`Block`] response from a [primitive block](blade_primitives::Block).
///
/// This will populate the `transactions` field with only the hashes of the transactions in the
/// block: [`BlockTransactions::Hashes`]
pub fn from_block_with_tx_hashes(block: PrimitiveBlock) -> Block {
    let transactions = block.transaction_hashes().collect();
    from_block_with_transactions(block, BlockTransactions::Hashes(transactions))
}

/// Create a new [`Block`] response from a [primitive block](blade_primitives::Block).
///
/// This will populate the `transactions` field with the _full_ transaction objects:
/// [`BlockTransactions::Full`]. Each transaction's `transactionIndex` is its position in the
/// block.
pub fn from_block_full(mut block: PrimitiveBlock) -> Block {
    let block_hash = block.header.hash;
    let block_number = block.header.number;
    let base_fee = block.header.base_fee_per_gas;

    let transactions = std::mem::take(&mut block.transactions)
        .into_iter()
        .enumerate()
        .map(|(idx, tx)| {
            from_recovered_with_block_context(tx, block_hash, block_number, base_fee, idx)
        })
        .collect();

    from_block_with_transactions(block, BlockTransactions::Full(transactions))
}

/// Converts a primitive header into the rpc [`Header`].
///
/// The byte fields are copied, the returned header never shares storage with `header`.
pub fn from_header(header: &PrimitiveHeader) -> Header {
    Header {
        parent_hash: header.parent_hash,
        uncles_hash: header.ommers_hash,
        miner: header.miner.to_vec(),
        state_root: header.state_root,
        transactions_root: header.transactions_root,
        receipts_root: header.receipts_root,
        logs_bloom: header.logs_bloom,
        difficulty: header.difficulty,
        // not tracked separately, the chain doesn't use proof of work
        total_difficulty: header.difficulty,
        number: header.number,
        gas_limit: header.gas_limit,
        gas_used: header.gas_used,
        timestamp: header.timestamp,
        extra_data: header.extra_data.to_vec(),
        mix_hash: header.mix_hash,
        nonce: header.nonce,
        hash: header.hash,
        base_fee_per_gas: header.base_fee_per_gas,
    }
}

#[inline]
fn from_block_with_transactions(block: PrimitiveBlock, transactions: BlockTransactions) -> Block {
    let uncles = block.ommers.iter().map(|ommer| ommer.hash).collect();
    Block { header: from_header(&block.header), size: block.size, transactions, uncles }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use blade_primitives::{
        Address, Bytes, Signature, Transaction, TransactionSigned, TxLegacy, B256, U256,
    };

    fn block_with_txs(count: u8) -> PrimitiveBlock {
        let transactions = (0..count)
            .map(|i| {
                let tx = Transaction::Legacy(TxLegacy {
                    nonce: u64::from(i),
                    gas_price: U256::from(1),
                    ..Default::default()
                });
                TransactionSigned::new(tx, Signature::default(), B256::with_last_byte(i + 1))
                    .with_signer(Address::with_last_byte(i))
            })
            .collect();
        PrimitiveBlock {
            header: PrimitiveHeader {
                number: 10,
                hash: B256::with_last_byte(0xff),
                difficulty: 3,
                miner: Bytes::from(vec![0xaa; 20]),
                extra_data: Bytes::from_static(b"blade"),
                ..Default::default()
            },
            transactions,
            ommers: vec![PrimitiveHeader {
                hash: B256::with_last_byte(0xee),
                ..Default::default()
            }],
            size: 1_024,
        }
    }

    #[test]
    fn hashes_in_block_order() {
        let block = from_block(block_with_txs(3), BlockTransactionsKind::Hashes);
        let BlockTransactions::Hashes(hashes) = &block.transactions else {
            panic!("expected transaction hashes")
        };
        assert_eq!(
            hashes,
            &vec![B256::with_last_byte(1), B256::with_last_byte(2), B256::with_last_byte(3)]
        );
        assert_eq!(block.uncles, vec![B256::with_last_byte(0xee)]);
        assert_eq!(block.size, 1_024);
        assert_eq!(block.header.total_difficulty, 3);
    }

    #[test]
    fn full_transactions_carry_their_position() {
        let block = from_block(block_with_txs(3), BlockTransactionsKind::Full);
        let BlockTransactions::Full(txs) = &block.transactions else {
            panic!("expected full transactions")
        };
        assert_eq!(txs.len(), 3);
        for (idx, tx) in txs.iter().enumerate() {
            assert_eq!(tx.transaction_index, Some(idx as u64));
            assert_eq!(tx.block_hash, Some(B256::with_last_byte(0xff)));
            assert_eq!(tx.block_number, Some(10));
            assert_eq!(tx.nonce, idx as u64);
        }
    }

    #[test]
    fn empty_block() {
        let block = from_block(block_with_txs(0), BlockTransactionsKind::Full);
        assert_matches!(&block.transactions, BlockTransactions::Full(txs) if txs.is_empty());
    }

    #[test]
    fn header_copy_is_independent() {
        let source = block_with_txs(0);
        let mut header = from_header(&source.header);
        header.miner[0] = 0;
        header.extra_data.clear();
        assert_eq!(source.header.miner, Bytes::from(vec![0xaa; 20]));
        assert_eq!(source.header.extra_data, Bytes::from_static(b"blade"));

        let first = from_block(source.clone(), BlockTransactionsKind::Hashes);
        let mut second = first.clone();
        second.header.extra_data[0] = b'x';
        assert_eq!(first.header.extra_data, b"blade".to_vec());
    }

    #[test]
    fn base_fee_omitted_when_zero() {
        let value = serde_json::to_value(from_header(&PrimitiveHeader::default())).unwrap();
        assert!(value.get("baseFeePerGas").is_none());

        let header = PrimitiveHeader { base_fee_per_gas: 100, ..Default::default() };
        let value = serde_json::to_value(from_header(&header)).unwrap();
        assert_eq!(value["baseFeePerGas"], "0x64");
    }
}
