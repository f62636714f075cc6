use crate::{Address, Bloom, Log, B256};

/// Receipt containing the result of a transaction execution.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Receipt {
    /// Post transaction state root, zero after Byzantium.
    pub root: B256,
    /// Gas used by this and all preceding transactions of the block.
    pub cumulative_gas_used: u64,
    /// Bloom filter over the receipt logs.
    pub logs_bloom: Bloom,
    /// Logs emitted by the transaction.
    pub logs: Vec<Log>,
    /// Whether the transaction succeeded.
    pub success: bool,
    /// Gas used by the transaction alone.
    pub gas_used: u64,
    /// Address of the created contract, if the transaction was a contract creation.
    pub contract_address: Option<Address>,
}

impl Receipt {
    /// Returns the EIP-658 status code, `1` for success and `0` for failure.
    pub const fn status_code(&self) -> u64 {
        self.success as u64
    }
}
