//! Canonical quantity encoding: `0x`-prefixed lower-case hex without leading zeros.
//!
//! Zero encodes as `0x0`. Decoding strips an optional `0x` prefix. 64-bit quantities also accept
//! plain decimal strings and JSON numbers, which some clients still send.

use super::DecodeError;
use crate::U256;
use core::fmt;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

const HEX_PREFIX: &str = "0x";

/// Encodes a `u64` as a canonical hex quantity.
pub fn encode_u64(value: u64) -> String {
    format!("{HEX_PREFIX}{value:x}")
}

/// Encodes a [`U256`] as a canonical hex quantity.
pub fn encode_u256(value: U256) -> String {
    if value.is_zero() {
        return format!("{HEX_PREFIX}0")
    }
    format!("{HEX_PREFIX}{value:x}")
}

/// Decodes a `u64` quantity.
///
/// A `0x` prefixed input is read as hex, an unprefixed input made of decimal digits only is read
/// as decimal, anything else is read as unprefixed hex.
pub fn decode_u64(input: &str) -> Result<u64, DecodeError> {
    let input = input.trim_matches('"');
    if let Some(digits) = input.strip_prefix(HEX_PREFIX) {
        return parse_hex_u64(digits)
    }
    if input.is_empty() {
        return Err(DecodeError::MissingDigits)
    }
    if input.bytes().all(|b| b.is_ascii_digit()) {
        return input.parse().map_err(|_| DecodeError::InvalidDecimal(input.to_string()))
    }
    parse_hex_u64(input)
}

fn parse_hex_u64(digits: &str) -> Result<u64, DecodeError> {
    if digits.is_empty() {
        return Err(DecodeError::MissingDigits)
    }
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(DecodeError::InvalidHex(digits.to_string()))
    }
    let significant = digits.trim_start_matches('0');
    if significant.len() > 16 {
        return Err(DecodeError::Overflow { bits: 64 })
    }
    u64::from_str_radix(digits, 16).map_err(|_| DecodeError::Overflow { bits: 64 })
}

/// Decodes an arbitrary precision quantity into a [`U256`].
///
/// The digits are read as big-endian hex, odd-length input is left-padded with a single zero.
/// An empty digit string decodes to zero. Unlike [`decode_u64`], unprefixed input is always hex,
/// so `"10"` decodes to 16.
pub fn decode_u256(input: &str) -> Result<U256, DecodeError> {
    let raw = super::hex_bytes::decode_bytes(input)?;
    let first_significant = raw.iter().position(|b| *b != 0).unwrap_or(raw.len());
    U256::try_from_be_slice(&raw[first_significant..]).ok_or(DecodeError::Overflow { bits: 256 })
}

/// Returns the hex digits of `input` after an optional `0x` prefix.
pub(crate) fn strip_hex_prefix(input: &str) -> &str {
    input.strip_prefix(HEX_PREFIX).unwrap_or(input)
}

/// Accepts a quantity either as a JSON string or as a JSON number.
struct QuantityVisitor<T> {
    decode: fn(&str) -> Result<T, DecodeError>,
    from_u64: fn(u64) -> T,
}

impl<T> de::Visitor<'_> for QuantityVisitor<T> {
    type Value = T;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a hex encoded quantity or an unsigned number")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        (self.decode)(v).map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok((self.from_u64)(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        u64::try_from(v)
            .map(self.from_u64)
            .map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
    }
}

fn deserialize_u64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    deserializer.deserialize_any(QuantityVisitor { decode: decode_u64, from_u64: |v| v })
}

fn deserialize_u256<'de, D: Deserializer<'de>>(deserializer: D) -> Result<U256, D::Error> {
    deserializer
        .deserialize_any(QuantityVisitor { decode: decode_u256, from_u64: |v| U256::from(v) })
}

/// A value that is serialized as a canonical quantity.
///
/// Useful where a quantity has to be written without a surrounding struct field, e.g. as a map
/// value or a sequence element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Quantity<T>(pub T);

impl Serialize for Quantity<u64> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        u64_hex::serialize(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for Quantity<u64> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_u64(deserializer).map(Self)
    }
}

impl Serialize for Quantity<U256> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        u256_hex::serialize(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for Quantity<U256> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_u256(deserializer).map(Self)
    }
}

impl<T> From<T> for Quantity<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

/// serde functions for a `u64` carried as a hex quantity.
pub mod u64_hex {
    use serde::{Deserializer, Serializer};

    /// Deserializes a `u64` from a hex quantity, a decimal string or a number.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
        super::deserialize_u64(deserializer)
    }

    /// Serializes a `u64` as a hex quantity.
    pub fn serialize<S: Serializer>(value: &u64, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(&format_args!("0x{value:x}"))
    }
}

/// serde functions for an `Option<u64>` carried as a hex quantity or `null`.
pub mod u64_hex_opt {
    use serde::{Deserialize, Deserializer, Serializer};

    /// Deserializes an optional `u64` quantity, `null` maps to `None`.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<u64>, D::Error> {
        Ok(Option::<super::Quantity<u64>>::deserialize(deserializer)?.map(|q| q.0))
    }

    /// Serializes an optional `u64` as a hex quantity or `null`.
    pub fn serialize<S: Serializer>(value: &Option<u64>, s: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(value) => super::u64_hex::serialize(value, s),
            None => s.serialize_none(),
        }
    }
}

/// serde functions for a [`U256`](crate::U256) carried as a hex quantity.
pub mod u256_hex {
    use crate::U256;
    use serde::{Deserializer, Serializer};

    /// Deserializes a [`U256`] from a hex quantity or a number.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<U256, D::Error> {
        super::deserialize_u256(deserializer)
    }

    /// Serializes a [`U256`] as a hex quantity.
    pub fn serialize<S: Serializer>(value: &U256, s: S) -> Result<S::Ok, S::Error> {
        if value.is_zero() {
            return s.serialize_str("0x0")
        }
        s.collect_str(&format_args!("0x{value:x}"))
    }
}

/// serde functions for an `Option<U256>` carried as a hex quantity or `null`.
pub mod u256_hex_opt {
    use crate::U256;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Deserializes an optional [`U256`] quantity, `null` maps to `None`.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<U256>, D::Error> {
        Ok(Option::<super::Quantity<U256>>::deserialize(deserializer)?.map(|q| q.0))
    }

    /// Serializes an optional [`U256`] as a hex quantity or `null`.
    pub fn serialize<S: Serializer>(value: &Option<U256>, s: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(value) => super::u256_hex::serialize(value, s),
            None => s.serialize_none(),
        }
    }
}
