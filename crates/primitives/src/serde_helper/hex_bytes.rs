//! Byte strings on the wire: `0x`-prefixed hex with an even number of digits.

use super::{quantity::strip_hex_prefix, DecodeError};
use alloy_primitives::hex;
use core::fmt;
use serde::{Serialize, Serializer};
use std::borrow::Cow;

/// Encodes a byte string as `0x`-prefixed hex. The output always has an even number of digits.
pub fn encode_bytes(bytes: impl AsRef<[u8]>) -> String {
    hex::encode_prefixed(bytes)
}

/// Decodes a byte string, stripping an optional `0x` prefix.
///
/// Only a single prefix is stripped, every remaining character must be a hex digit. Odd-length
/// input is left-padded with a single `0` before decoding.
pub fn decode_bytes(input: &str) -> Result<Vec<u8>, DecodeError> {
    let digits = strip_hex_prefix(input);
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(DecodeError::InvalidHex(input.to_string()))
    }
    let digits: Cow<'_, str> =
        if digits.len() % 2 == 0 { digits.into() } else { format!("0{digits}").into() };
    hex::decode(digits.as_ref()).map_err(|_| DecodeError::InvalidHex(input.to_string()))
}

/// A borrowed byte string that serializes as `0x`-prefixed hex without an intermediate string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexBytes<'a>(pub &'a [u8]);

impl fmt::Display for HexBytes<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("0x")?;
        self.0.iter().try_for_each(|byte| write!(f, "{byte:02x}"))
    }
}

impl Serialize for HexBytes<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// serde functions for a `Vec<u8>` carried as hex.
pub mod vec {
    use serde::{Deserialize, Deserializer, Serializer};

    /// Deserializes a byte vector from hex.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let s = String::deserialize(deserializer)?;
        super::decode_bytes(&s).map_err(serde::de::Error::custom)
    }

    /// Serializes a byte vector as hex.
    pub fn serialize<S: Serializer>(value: &[u8], s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&super::encode_bytes(value))
    }
}

/// serde functions for [`Bytes`](crate::Bytes) carried as hex.
pub mod bytes {
    use crate::Bytes;
    use serde::{Deserializer, Serializer};

    /// Deserializes [`Bytes`] from hex.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Bytes, D::Error> {
        super::vec::deserialize(deserializer).map(Bytes::from)
    }

    /// Serializes [`Bytes`] as hex.
    pub fn serialize<S: Serializer>(value: &Bytes, s: S) -> Result<S::Ok, S::Error> {
        super::vec::serialize(value, s)
    }
}

/// serde functions for an `Option<Bytes>` carried as hex or `null`.
pub mod bytes_opt {
    use crate::Bytes;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Deserializes optional [`Bytes`], `null` maps to `None`.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Bytes>, D::Error> {
        #[derive(Deserialize)]
        struct Hex(#[serde(with = "super::bytes")] Bytes);

        Ok(Option::<Hex>::deserialize(deserializer)?.map(|hex| hex.0))
    }

    /// Serializes optional [`Bytes`] as hex or `null`.
    pub fn serialize<S: Serializer>(value: &Option<Bytes>, s: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(value) => super::bytes::serialize(value, s),
            None => s.serialize_none(),
        }
    }
}
