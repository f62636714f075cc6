//! Wire encoding helpers shared by every RPC type.
//!
//! Quantities are `0x`-prefixed hex without leading zeros, byte strings are `0x`-prefixed hex of
//! even length. Fixed width values (addresses, hashes, blooms) keep their zero padded form and
//! use the `alloy-primitives` serde impls.

pub mod hex_bytes;
pub mod quantity;

pub use hex_bytes::{decode_bytes, encode_bytes};
pub use quantity::{decode_u256, decode_u64, encode_u256, encode_u64, Quantity};

/// Errors returned when decoding hex quantities or byte strings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The input carried a prefix but no digits.
    #[error("hex string has no digits")]
    MissingDigits,
    /// The input contains characters that are not hex digits.
    #[error("invalid hex string: {0}")]
    InvalidHex(String),
    /// The input is not a valid decimal number.
    #[error("invalid decimal string: {0}")]
    InvalidDecimal(String),
    /// The value does not fit the target width.
    #[error("quantity exceeds {bits} bits")]
    Overflow {
        /// Width of the target integer.
        bits: u32,
    },
}
