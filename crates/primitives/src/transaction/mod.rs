use crate::{Address, Bytes, ChainId, TxHash, U256};
use std::ops::Deref;

pub use access_list::{AccessList, AccessListItem};
pub use eip1559::TxEip1559;
pub use eip2930::TxEip2930;
pub use error::UnknownTxType;
pub use legacy::TxLegacy;
pub use signature::Signature;
pub use tx_type::{TxType, EIP1559_TX_TYPE_ID, EIP2930_TX_TYPE_ID, LEGACY_TX_TYPE_ID};

mod access_list;
mod eip1559;
mod eip2930;
mod error;
mod legacy;
mod signature;
mod tx_type;

/// Whether a transaction calls an address or creates a contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TxKind {
    /// No `to` field set, this transaction will create a contract
    #[default]
    Create,
    /// Transaction will call this address or transfer funds to this address
    Call(Address),
}

impl TxKind {
    /// Returns the address of the callee, `None` for contract creation.
    pub const fn to(&self) -> Option<&Address> {
        match self {
            Self::Call(to) => Some(to),
            Self::Create => None,
        }
    }
}

impl From<Option<Address>> for TxKind {
    fn from(to: Option<Address>) -> Self {
        to.map_or(Self::Create, Self::Call)
    }
}

/// A raw transaction.
///
/// Transaction types were introduced in [EIP-2718](https://eips.ethereum.org/EIPS/eip-2718).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Transaction {
    /// Legacy transaction.
    Legacy(TxLegacy),
    /// Transaction with an access list.
    Eip2930(TxEip2930),
    /// Transaction with a priority fee.
    Eip1559(TxEip1559),
}

// === impl Transaction ===

impl Transaction {
    /// Returns the transaction type.
    pub const fn tx_type(&self) -> TxType {
        match self {
            Self::Legacy(_) => TxType::Legacy,
            Self::Eip2930(_) => TxType::Eip2930,
            Self::Eip1559(_) => TxType::Eip1559,
        }
    }

    /// Returns `true` if the transaction uses the dynamic fee market.
    pub const fn is_dynamic_fee(&self) -> bool {
        matches!(self, Self::Eip1559(_))
    }

    /// Get `chain_id`.
    pub const fn chain_id(&self) -> Option<ChainId> {
        match self {
            Self::Legacy(TxLegacy { chain_id, .. }) => *chain_id,
            Self::Eip2930(TxEip2930 { chain_id, .. }) |
            Self::Eip1559(TxEip1559 { chain_id, .. }) => Some(*chain_id),
        }
    }

    /// Gets the transaction's nonce.
    pub const fn nonce(&self) -> u64 {
        match self {
            Self::Legacy(TxLegacy { nonce, .. }) |
            Self::Eip2930(TxEip2930 { nonce, .. }) |
            Self::Eip1559(TxEip1559 { nonce, .. }) => *nonce,
        }
    }

    /// Get the gas limit of the transaction.
    pub const fn gas_limit(&self) -> u64 {
        match self {
            Self::Legacy(TxLegacy { gas_limit, .. }) |
            Self::Eip2930(TxEip2930 { gas_limit, .. }) |
            Self::Eip1559(TxEip1559 { gas_limit, .. }) => *gas_limit,
        }
    }

    /// Gets the transaction's [`TxKind`], which is the address of the recipient or
    /// [`TxKind::Create`] if the transaction is a contract creation.
    pub const fn kind(&self) -> &TxKind {
        match self {
            Self::Legacy(TxLegacy { to, .. }) |
            Self::Eip2930(TxEip2930 { to, .. }) |
            Self::Eip1559(TxEip1559 { to, .. }) => to,
        }
    }

    /// Get the transaction's recipient, `None` for contract creation.
    pub fn to(&self) -> Option<Address> {
        self.kind().to().copied()
    }

    /// Gets the transaction's value field.
    pub const fn value(&self) -> U256 {
        match self {
            Self::Legacy(TxLegacy { value, .. }) |
            Self::Eip2930(TxEip2930 { value, .. }) |
            Self::Eip1559(TxEip1559 { value, .. }) => *value,
        }
    }

    /// Get the transaction's input field.
    pub const fn input(&self) -> &Bytes {
        match self {
            Self::Legacy(TxLegacy { input, .. }) |
            Self::Eip2930(TxEip2930 { input, .. }) |
            Self::Eip1559(TxEip1559 { input, .. }) => input,
        }
    }

    /// Returns the access list, `None` for legacy transactions.
    pub const fn access_list(&self) -> Option<&AccessList> {
        match self {
            Self::Legacy(_) => None,
            Self::Eip2930(TxEip2930 { access_list, .. }) |
            Self::Eip1559(TxEip1559 { access_list, .. }) => Some(access_list),
        }
    }

    /// Returns the explicit gas price, `None` for dynamic fee transactions.
    pub const fn gas_price(&self) -> Option<U256> {
        match self {
            Self::Legacy(TxLegacy { gas_price, .. }) |
            Self::Eip2930(TxEip2930 { gas_price, .. }) => Some(*gas_price),
            Self::Eip1559(_) => None,
        }
    }

    /// Returns the fee cap of a dynamic fee transaction.
    pub const fn max_fee_per_gas(&self) -> Option<U256> {
        match self {
            Self::Eip1559(TxEip1559 { max_fee_per_gas, .. }) => Some(*max_fee_per_gas),
            _ => None,
        }
    }

    /// Returns the tip of a dynamic fee transaction.
    pub const fn max_priority_fee_per_gas(&self) -> Option<U256> {
        match self {
            Self::Eip1559(TxEip1559 { max_priority_fee_per_gas, .. }) => {
                Some(*max_priority_fee_per_gas)
            }
            _ => None,
        }
    }

    /// Returns the price per gas this transaction pays in a block with the given base fee.
    pub fn effective_gas_price(&self, base_fee: u64) -> U256 {
        match self {
            Self::Legacy(TxLegacy { gas_price, .. }) |
            Self::Eip2930(TxEip2930 { gas_price, .. }) => *gas_price,
            Self::Eip1559(tx) => tx.effective_gas_price(base_fee),
        }
    }
}

/// Signed transaction with its hash.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TransactionSigned {
    /// Transaction hash
    pub hash: TxHash,
    /// The transaction signature values
    pub signature: Signature,
    /// Raw transaction info
    pub transaction: Transaction,
}

impl TransactionSigned {
    /// Creates a signed transaction from its parts.
    pub const fn new(transaction: Transaction, signature: Signature, hash: TxHash) -> Self {
        Self { hash, signature, transaction }
    }

    /// Transaction hash.
    pub const fn hash(&self) -> TxHash {
        self.hash
    }

    /// Attaches the already known signer.
    pub const fn with_signer(self, signer: Address) -> TransactionSignedEcRecovered {
        TransactionSignedEcRecovered { signed_transaction: self, signer }
    }
}

impl Deref for TransactionSigned {
    type Target = Transaction;

    fn deref(&self) -> &Self::Target {
        &self.transaction
    }
}

/// Signed transaction with its sender.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TransactionSignedEcRecovered {
    /// Signer of the transaction
    signer: Address,
    /// Signed transaction
    signed_transaction: TransactionSigned,
}

// === impl TransactionSignedEcRecovered ===

impl TransactionSignedEcRecovered {
    /// Signer of transaction recovered from signature
    pub const fn signer(&self) -> Address {
        self.signer
    }

    /// Transform back to [`TransactionSigned`]
    pub fn into_signed(self) -> TransactionSigned {
        self.signed_transaction
    }
}

impl Deref for TransactionSignedEcRecovered {
    type Target = TransactionSigned;

    fn deref(&self) -> &Self::Target {
        &self.signed_transaction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dynamic_fee_tx() -> Transaction {
        Transaction::Eip1559(TxEip1559 {
            chain_id: 100,
            nonce: 7,
            gas_limit: 21_000,
            max_fee_per_gas: U256::from(300),
            max_priority_fee_per_gas: U256::from(2),
            to: TxKind::Call(Address::with_last_byte(9)),
            ..Default::default()
        })
    }

    #[test]
    fn dynamic_fee_accessors() {
        let tx = dynamic_fee_tx();
        assert_eq!(tx.tx_type(), TxType::Eip1559);
        assert!(tx.is_dynamic_fee());
        assert_eq!(tx.gas_price(), None);
        assert_eq!(tx.max_fee_per_gas(), Some(U256::from(300)));
        assert_eq!(tx.max_priority_fee_per_gas(), Some(U256::from(2)));
        assert_eq!(tx.effective_gas_price(100), U256::from(102));
        assert_eq!(tx.chain_id(), Some(100));
        assert_eq!(tx.to(), Some(Address::with_last_byte(9)));
        assert!(tx.access_list().is_some_and(AccessList::is_empty));
    }

    #[test]
    fn legacy_accessors() {
        let tx = Transaction::Legacy(TxLegacy {
            gas_price: U256::from(5),
            to: TxKind::Create,
            ..Default::default()
        });
        assert_eq!(tx.gas_price(), Some(U256::from(5)));
        assert_eq!(tx.effective_gas_price(100), U256::from(5));
        assert_eq!(tx.max_fee_per_gas(), None);
        assert_eq!(tx.chain_id(), None);
        assert_eq!(tx.to(), None);
        assert!(tx.access_list().is_none());
    }

    #[test]
    fn recovered_derefs_to_transaction() {
        let signer = Address::with_last_byte(1);
        let signed = TransactionSigned::new(
            dynamic_fee_tx(),
            Signature::default(),
            TxHash::with_last_byte(3),
        );
        let recovered = signed.clone().with_signer(signer);
        assert_eq!(recovered.signer(), signer);
        assert_eq!(recovered.hash(), TxHash::with_last_byte(3));
        assert_eq!(recovered.nonce(), 7);
        assert_eq!(recovered.into_signed(), signed);
    }
}
