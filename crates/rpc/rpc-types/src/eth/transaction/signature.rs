//! Signature related RPC values
use blade_primitives::{serde_helper::quantity, U256};
use serde::{Deserialize, Serialize};

/// Container type for all signature fields in RPC
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Signature {
    /// The V value of the signature.
    #[serde(with = "quantity::u256_hex")]
    pub v: U256,
    /// The R field of the signature; the point on the curve.
    #[serde(with = "quantity::u256_hex")]
    pub r: U256,
    /// The S field of the signature; the point on the curve.
    #[serde(with = "quantity::u256_hex")]
    pub s: U256,
}

impl From<blade_primitives::Signature> for Signature {
    fn from(signature: blade_primitives::Signature) -> Self {
        Self { v: signature.v, r: signature.r, s: signature.s }
    }
}

impl From<Signature> for blade_primitives::Signature {
    fn from(signature: Signature) -> Self {
        Self { r: signature.r, s: signature.s, v: signature.v }
    }
}
