use crate::U256;

/// Raw signature values as carried by a signed transaction.
///
/// `v` is kept as encoded: the recovery id for typed transactions, the EIP-155 value for legacy
/// ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Signature {
    /// The R field of the signature; the point on the curve.
    pub r: U256,
    /// The S field of the signature; the point on the curve.
    pub s: U256,
    /// The V field of the signature.
    pub v: U256,
}
