//! Compatibility and utils for RPC types
//!
//! This crate provides helper functions to convert between blade primitive types and rpc types.

#![doc(issue_tracker_base_url = "https://github.com/blade-chain/blade-rpc/issues/")]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

pub mod block;
pub mod log;
pub mod receipt;
pub mod transaction;

pub use transaction::{BlockContext, ConversionError, TransactionWithContext};
