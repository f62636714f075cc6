//! Ethereum related types

mod block;
mod call;
mod fee;
mod log;
pub mod state;
mod syncing;
mod transaction;

pub use block::{Block, BlockTransactions, BlockTransactionsKind, Header};
pub use call::CallMsg;
pub use fee::FeeHistory;
pub use log::Log;
pub use state::{AccountOverride, StateOverride};
pub use syncing::SyncProgress;
pub use transaction::*;
