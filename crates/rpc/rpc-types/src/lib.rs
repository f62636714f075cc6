//! Blade RPC type definitions
//!
//! Provides the wire types of the `eth` namespace and the pooled JSON encoders used for the
//! request shapes that are built on every call.

#![doc(issue_tracker_base_url = "https://github.com/blade-chain/blade-rpc/issues/")]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod eth;
pub mod json;

pub use eth::*;
