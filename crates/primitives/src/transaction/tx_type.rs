use crate::transaction::error::UnknownTxType;

/// Identifier for legacy transaction, however a legacy tx is technically not typed.
pub const LEGACY_TX_TYPE_ID: u8 = 0;

/// Identifier for an EIP2930 transaction.
pub const EIP2930_TX_TYPE_ID: u8 = 1;

/// Identifier for an EIP1559 transaction.
pub const EIP1559_TX_TYPE_ID: u8 = 2;

/// Transaction Type
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum TxType {
    /// Legacy transaction pre EIP-2929
    #[default]
    Legacy = 0_isize,
    /// AccessList transaction
    Eip2930 = 1_isize,
    /// Transaction with Priority fee
    Eip1559 = 2_isize,
}

impl From<TxType> for u8 {
    fn from(value: TxType) -> Self {
        match value {
            TxType::Legacy => LEGACY_TX_TYPE_ID,
            TxType::Eip2930 => EIP2930_TX_TYPE_ID,
            TxType::Eip1559 => EIP1559_TX_TYPE_ID,
        }
    }
}

impl From<TxType> for u64 {
    fn from(value: TxType) -> Self {
        u8::from(value) as Self
    }
}

impl TryFrom<u64> for TxType {
    type Error = UnknownTxType;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Legacy),
            1 => Ok(Self::Eip2930),
            2 => Ok(Self::Eip1559),
            _ => Err(UnknownTxType(value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_ids() {
        assert_eq!(u64::from(TxType::Eip1559), 2);
        assert_eq!(TxType::try_from(1).unwrap(), TxType::Eip2930);
        assert_eq!(TxType::try_from(0x7f), Err(UnknownTxType(0x7f)));
    }
}
