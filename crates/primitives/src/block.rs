use crate::{Header, TransactionSignedEcRecovered, TxHash};

/// A sealed block with recovered transaction senders.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Block {
    /// Block header.
    pub header: Header,
    /// Transactions in block order.
    pub transactions: Vec<TransactionSignedEcRecovered>,
    /// Ommer headers.
    pub ommers: Vec<Header>,
    /// Encoded size of the block in bytes, as reported by storage.
    pub size: u64,
}

impl Block {
    /// Returns an iterator over the transaction hashes, in block order.
    pub fn transaction_hashes(&self) -> impl Iterator<Item = TxHash> + '_ {
        self.transactions.iter().map(|tx| tx.hash)
    }
}
