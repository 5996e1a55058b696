//! In-memory reference implementation of the asset ledger boundary.

use std::collections::BTreeMap;

use crate::domain::{AccountId, Amount, AssetId};
use crate::error::{PoolError, Result};
use crate::traits::AssetTransfer;

/// A multi-asset balance ledger held entirely in memory.
///
/// Mirrors the behavior of a standard fungible-asset ledger with an
/// allowance mechanism: holders `approve` a spender for an amount, and
/// the spender pulls funds with `transfer_from`. Used as the test
/// fixture for [`PoolLedger`](crate::ledger::PoolLedger) and as a
/// reference for implementing [`AssetTransfer`] over a real backend.
///
/// # Examples
///
/// ```
/// use pairswap::assets::InMemoryAssets;
/// use pairswap::domain::{AccountId, Amount, AssetId};
/// use pairswap::traits::AssetTransfer;
///
/// let gold = AssetId::from_bytes([1u8; 32]);
/// let alice = AccountId::from_bytes([10u8; 32]);
/// let bob = AccountId::from_bytes([11u8; 32]);
///
/// let mut assets = InMemoryAssets::new();
/// assets.mint(gold, alice, Amount::new(1_000));
/// assets.transfer(gold, alice, bob, Amount::new(400)).expect("funded");
/// assert_eq!(assets.balance_of(gold, bob), Amount::new(400));
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryAssets {
    balances: BTreeMap<(AssetId, AccountId), Amount>,
    allowances: BTreeMap<(AssetId, AccountId, AccountId), Amount>,
}

impl InMemoryAssets {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Credits `amount` of `asset` to `holder` out of thin air.
    ///
    /// Issuance belongs to the asset's own authority, not to the pool
    /// ledger; it exists here to fund accounts in tests and examples.
    pub fn mint(&mut self, asset: AssetId, holder: AccountId, amount: Amount) {
        let entry = self.balances.entry((asset, holder)).or_insert(Amount::ZERO);
        *entry = entry.checked_add(&amount).unwrap_or(Amount::MAX);
    }

    /// Authorizes `spender` to pull up to `amount` of `owner`'s `asset`.
    ///
    /// Replaces any previous allowance for the same triple.
    pub fn approve(&mut self, asset: AssetId, owner: AccountId, spender: AccountId, amount: Amount) {
        self.allowances.insert((asset, owner, spender), amount);
    }

    /// Returns the remaining allowance for `(asset, owner, spender)`.
    #[must_use]
    pub fn allowance(&self, asset: AssetId, owner: AccountId, spender: AccountId) -> Amount {
        self.allowances
            .get(&(asset, owner, spender))
            .copied()
            .unwrap_or(Amount::ZERO)
    }

    fn debit(&mut self, asset: AssetId, from: AccountId, amount: Amount) -> Result<()> {
        let balance = self.balance_of(asset, from);
        let remaining = balance
            .checked_sub(&amount)
            .ok_or(PoolError::TransferFailed("insufficient balance"))?;
        if remaining.is_zero() {
            self.balances.remove(&(asset, from));
        } else {
            self.balances.insert((asset, from), remaining);
        }
        Ok(())
    }

    fn credit(&mut self, asset: AssetId, to: AccountId, amount: Amount) -> Result<()> {
        let balance = self.balance_of(asset, to);
        let updated = balance
            .checked_add(&amount)
            .ok_or(PoolError::Overflow("credit balance"))?;
        self.balances.insert((asset, to), updated);
        Ok(())
    }
}

impl AssetTransfer for InMemoryAssets {
    fn balance_of(&self, asset: AssetId, holder: AccountId) -> Amount {
        self.balances
            .get(&(asset, holder))
            .copied()
            .unwrap_or(Amount::ZERO)
    }

    fn transfer(
        &mut self,
        asset: AssetId,
        from: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<()> {
        if amount.is_zero() {
            return Ok(());
        }
        self.debit(asset, from, amount)?;
        self.credit(asset, to, amount)
    }

    fn transfer_from(
        &mut self,
        spender: AccountId,
        asset: AssetId,
        owner: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<()> {
        if amount.is_zero() {
            return Ok(());
        }
        let allowed = self.allowance(asset, owner, spender);
        let remaining = allowed
            .checked_sub(&amount)
            .ok_or(PoolError::TransferFailed("insufficient allowance"))?;
        // Allowance is consumed only after the balance check succeeds.
        self.debit(asset, owner, amount)?;
        self.credit(asset, to, amount)?;
        self.allowances.insert((asset, owner, spender), remaining);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn asset(byte: u8) -> AssetId {
        AssetId::from_bytes([byte; 32])
    }

    fn account(byte: u8) -> AccountId {
        AccountId::from_bytes([byte; 32])
    }

    // -- balances -------------------------------------------------------------

    #[test]
    fn unknown_holder_has_zero_balance() {
        let assets = InMemoryAssets::new();
        assert_eq!(assets.balance_of(asset(1), account(10)), Amount::ZERO);
    }

    #[test]
    fn mint_accumulates() {
        let mut assets = InMemoryAssets::new();
        assets.mint(asset(1), account(10), Amount::new(100));
        assets.mint(asset(1), account(10), Amount::new(50));
        assert_eq!(assets.balance_of(asset(1), account(10)), Amount::new(150));
    }

    #[test]
    fn balances_are_per_asset() {
        let mut assets = InMemoryAssets::new();
        assets.mint(asset(1), account(10), Amount::new(100));
        assert_eq!(assets.balance_of(asset(2), account(10)), Amount::ZERO);
    }

    // -- transfer -------------------------------------------------------------

    #[test]
    fn transfer_moves_funds() {
        let mut assets = InMemoryAssets::new();
        assets.mint(asset(1), account(10), Amount::new(100));
        let Ok(()) = assets.transfer(asset(1), account(10), account(11), Amount::new(40)) else {
            panic!("expected Ok");
        };
        assert_eq!(assets.balance_of(asset(1), account(10)), Amount::new(60));
        assert_eq!(assets.balance_of(asset(1), account(11)), Amount::new(40));
    }

    #[test]
    fn transfer_insufficient_balance_rejected() {
        let mut assets = InMemoryAssets::new();
        assets.mint(asset(1), account(10), Amount::new(10));
        let result = assets.transfer(asset(1), account(10), account(11), Amount::new(11));
        assert!(matches!(result, Err(PoolError::TransferFailed(_))));
        // Nothing moved.
        assert_eq!(assets.balance_of(asset(1), account(10)), Amount::new(10));
        assert_eq!(assets.balance_of(asset(1), account(11)), Amount::ZERO);
    }

    #[test]
    fn transfer_of_zero_is_noop() {
        let mut assets = InMemoryAssets::new();
        let Ok(()) = assets.transfer(asset(1), account(10), account(11), Amount::ZERO) else {
            panic!("expected Ok");
        };
    }

    // -- transfer_from --------------------------------------------------------

    #[test]
    fn transfer_from_consumes_allowance() {
        let mut assets = InMemoryAssets::new();
        assets.mint(asset(1), account(10), Amount::new(100));
        assets.approve(asset(1), account(10), account(20), Amount::new(70));

        let Ok(()) = assets.transfer_from(
            account(20),
            asset(1),
            account(10),
            account(30),
            Amount::new(50),
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(assets.balance_of(asset(1), account(30)), Amount::new(50));
        assert_eq!(
            assets.allowance(asset(1), account(10), account(20)),
            Amount::new(20)
        );
    }

    #[test]
    fn transfer_from_without_allowance_rejected() {
        let mut assets = InMemoryAssets::new();
        assets.mint(asset(1), account(10), Amount::new(100));
        let result = assets.transfer_from(
            account(20),
            asset(1),
            account(10),
            account(30),
            Amount::new(1),
        );
        assert!(matches!(result, Err(PoolError::TransferFailed(_))));
    }

    #[test]
    fn transfer_from_beyond_balance_keeps_allowance() {
        let mut assets = InMemoryAssets::new();
        assets.mint(asset(1), account(10), Amount::new(10));
        assets.approve(asset(1), account(10), account(20), Amount::new(100));
        let result = assets.transfer_from(
            account(20),
            asset(1),
            account(10),
            account(30),
            Amount::new(50),
        );
        assert!(matches!(result, Err(PoolError::TransferFailed(_))));
        assert_eq!(
            assets.allowance(asset(1), account(10), account(20)),
            Amount::new(100)
        );
    }
}
