//! External asset ledger boundary.

use crate::domain::{AccountId, Amount, AssetId};
use crate::error::Result;

/// The external balance ledger that holds the traded assets.
///
/// The pool ledger never stores asset balances itself; it instructs this
/// collaborator to move them and trusts the moves to be atomic with its
/// own state commit — a transfer either happens in full or returns an
/// error, and the pool ledger only commits reserve changes after every
/// required transfer has succeeded.
///
/// The semantics mirror a standard fungible-asset ledger:
///
/// - [`balance_of`](Self::balance_of) — read a holder's balance.
/// - [`transfer`](Self::transfer) — move funds the caller controls.
/// - [`transfer_from`](Self::transfer_from) — move funds a holder has
///   previously authorized `spender` to pull.
///
/// # Errors
///
/// Implementations report failures as
/// [`PoolError::TransferFailed`](crate::error::PoolError::TransferFailed);
/// the pool ledger propagates them unchanged and commits nothing.
pub trait AssetTransfer {
    /// Returns `holder`'s balance of `asset` (zero if unknown).
    fn balance_of(&self, asset: AssetId, holder: AccountId) -> Amount;

    /// Moves `amount` of `asset` from `from` to `to`.
    ///
    /// # Errors
    ///
    /// Fails if `from` holds less than `amount`.
    fn transfer(
        &mut self,
        asset: AssetId,
        from: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<()>;

    /// Moves `amount` of `asset` from `owner` to `to` on the authority of
    /// `spender`, consuming the owner's allowance for that spender.
    ///
    /// # Errors
    ///
    /// Fails if the allowance or the owner's balance is less than
    /// `amount`.
    fn transfer_from(
        &mut self,
        spender: AccountId,
        asset: AssetId,
        owner: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<()>;
}
