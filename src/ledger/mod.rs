//! The pool ledger: the store of pools and every mutating operation.
//!
//! [`PoolLedger`] owns one [`Pool`](crate::pool::Pool) per asset pair and
//! coordinates each operation with the external
//! [`AssetTransfer`](crate::traits::AssetTransfer) collaborator.

mod pool_ledger;

#[cfg(test)]
mod proptest_properties;

pub use pool_ledger::PoolLedger;
