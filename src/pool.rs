//! Per-pair pool state and its transitions.
//!
//! A [`Pool`] owns the reserves of one asset pair, the total supply of
//! its ownership shares, and the per-holder share ledger. Reserves are
//! stored in the pair's canonical order.
//!
//! # State Invariants
//!
//! - `total_shares == 0 ⇔ reserve_a == 0 ∧ reserve_b == 0` (empty pool);
//!   otherwise both reserves are strictly positive.
//! - The sum of all entries in the share ledger equals `total_shares`;
//!   zero balances are not stored.
//!
//! # Transition Model
//!
//! Every mutation is split into a fallible `plan_*` step that computes
//! and validates the complete post-state on copies, and an infallible
//! `commit_*` step that writes it. The ledger runs external asset
//! transfers between the two steps, so a failed transfer aborts the
//! operation with the pool untouched.

use std::collections::BTreeMap;

use crate::domain::{AccountId, Amount, AssetId, AssetPair, Rounding, Shares};
use crate::error::{PoolError, Result};
use crate::pricing;

/// Validated post-state of a deposit. Amounts are in canonical pair order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DepositPlan {
    pub(crate) amount_a: Amount,
    pub(crate) amount_b: Amount,
    pub(crate) minted: Shares,
    new_reserve_a: Amount,
    new_reserve_b: Amount,
    new_total: Shares,
    new_recipient_balance: Shares,
}

/// Validated post-state of a withdrawal. Amounts are in canonical pair order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct WithdrawalPlan {
    pub(crate) amount_a: Amount,
    pub(crate) amount_b: Amount,
    burned: Shares,
    new_reserve_a: Amount,
    new_reserve_b: Amount,
    new_total: Shares,
    new_holder_balance: Shares,
}

/// Validated post-state of a single swap hop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SwapPlan {
    asset_in: AssetId,
    pub(crate) amount_in: Amount,
    pub(crate) amount_out: Amount,
    new_reserve_in: Amount,
    new_reserve_out: Amount,
}

/// A two-asset constant-product pool with proportional-share accounting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pool {
    pair: AssetPair,
    reserve_a: Amount,
    reserve_b: Amount,
    total_shares: Shares,
    share_balances: BTreeMap<AccountId, Shares>,
}

impl Pool {
    /// Creates an empty pool for the given pair.
    #[must_use]
    pub fn new(pair: AssetPair) -> Self {
        Self {
            pair,
            reserve_a: Amount::ZERO,
            reserve_b: Amount::ZERO,
            total_shares: Shares::ZERO,
            share_balances: BTreeMap::new(),
        }
    }

    /// Returns the pool's asset pair.
    #[must_use]
    pub const fn pair(&self) -> AssetPair {
        self.pair
    }

    /// Returns the reserve of the canonically-first asset.
    #[must_use]
    pub const fn reserve_a(&self) -> Amount {
        self.reserve_a
    }

    /// Returns the reserve of the canonically-second asset.
    #[must_use]
    pub const fn reserve_b(&self) -> Amount {
        self.reserve_b
    }

    /// Returns the total supply of ownership shares.
    #[must_use]
    pub const fn total_shares(&self) -> Shares {
        self.total_shares
    }

    /// Returns the share balance of `holder` (zero if unknown).
    #[must_use]
    pub fn shares_of(&self, holder: AccountId) -> Shares {
        self.share_balances
            .get(&holder)
            .copied()
            .unwrap_or(Shares::ZERO)
    }

    /// Returns `true` if the pool holds no reserves and no shares exist.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total_shares.is_zero()
    }

    /// Returns `(reserve of base, reserve of the other asset)`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidInput`] if `base` is not in the pair.
    pub fn oriented_reserves(&self, base: AssetId) -> Result<(Amount, Amount)> {
        if base == self.pair.first() {
            Ok((self.reserve_a, self.reserve_b))
        } else if base == self.pair.second() {
            Ok((self.reserve_b, self.reserve_a))
        } else {
            Err(PoolError::InvalidInput("asset is not part of this pair"))
        }
    }

    // -- Deposit ------------------------------------------------------------

    /// Plans a deposit of up to `(desired_a, desired_b)` (canonical order).
    ///
    /// For the first deposit the desired amounts are accepted exactly and
    /// `isqrt(a × b)` shares are minted. For a non-empty pool the accepted
    /// pair is scaled down to preserve the reserve ratio, and minting is
    /// `min(a × total / reserve_a, b × total / reserve_b)`, floor-rounded
    /// on both sides.
    ///
    /// # Errors
    ///
    /// - [`PoolError::ZeroAmount`] if either desired amount is zero.
    /// - [`PoolError::InsufficientLiquidityMinted`] if the mint computes
    ///   to zero shares.
    /// - [`PoolError::Overflow`] if any intermediate product overflows.
    pub(crate) fn plan_deposit(
        &self,
        desired_a: Amount,
        desired_b: Amount,
        recipient: AccountId,
    ) -> Result<DepositPlan> {
        if desired_a.is_zero() || desired_b.is_zero() {
            return Err(PoolError::ZeroAmount);
        }

        let (amount_a, amount_b, minted) = if self.total_shares.is_zero() {
            let product = desired_a
                .checked_mul(&desired_b)
                .ok_or(PoolError::Overflow("bootstrap product"))?;
            let minted = Shares::new(pricing::isqrt(product.get()));
            if minted.is_zero() {
                return Err(PoolError::InsufficientLiquidityMinted);
            }
            (desired_a, desired_b, minted)
        } else {
            let (amount_a, amount_b) = self.accepted_amounts(desired_a, desired_b)?;
            let minted = self.proportional_mint(amount_a, amount_b)?;
            if minted.is_zero() {
                return Err(PoolError::InsufficientLiquidityMinted);
            }
            (amount_a, amount_b, minted)
        };

        let new_reserve_a = self
            .reserve_a
            .checked_add(&amount_a)
            .ok_or(PoolError::Overflow("reserve_a update"))?;
        let new_reserve_b = self
            .reserve_b
            .checked_add(&amount_b)
            .ok_or(PoolError::Overflow("reserve_b update"))?;
        let new_total = self
            .total_shares
            .checked_add(&minted)
            .ok_or(PoolError::Overflow("total shares update"))?;
        let new_recipient_balance = self
            .shares_of(recipient)
            .checked_add(&minted)
            .ok_or(PoolError::Overflow("recipient balance update"))?;

        Ok(DepositPlan {
            amount_a,
            amount_b,
            minted,
            new_reserve_a,
            new_reserve_b,
            new_total,
            new_recipient_balance,
        })
    }

    /// Commits a planned deposit, crediting `recipient` with the mint.
    pub(crate) fn commit_deposit(&mut self, plan: &DepositPlan, recipient: AccountId) {
        self.reserve_a = plan.new_reserve_a;
        self.reserve_b = plan.new_reserve_b;
        self.total_shares = plan.new_total;
        self.share_balances
            .insert(recipient, plan.new_recipient_balance);
    }

    /// Scales the desired amounts down to the current reserve ratio.
    ///
    /// The asset whose desired amount is the binding constraint is used
    /// fully; the other is reduced proportionally, rounding down.
    fn accepted_amounts(&self, desired_a: Amount, desired_b: Amount) -> Result<(Amount, Amount)> {
        let b_optimal = pricing::quote(desired_a, self.reserve_a, self.reserve_b)?;
        if b_optimal <= desired_b {
            Ok((desired_a, b_optimal))
        } else {
            let a_optimal = pricing::quote(desired_b, self.reserve_b, self.reserve_a)?;
            Ok((a_optimal, desired_b))
        }
    }

    /// `min(amount_a × total / reserve_a, amount_b × total / reserve_b)`.
    fn proportional_mint(&self, amount_a: Amount, amount_b: Amount) -> Result<Shares> {
        let total = Amount::new(self.total_shares.get());

        let share_a = amount_a
            .checked_mul(&total)
            .ok_or(PoolError::Overflow("mint numerator a"))?
            .checked_div(&self.reserve_a, Rounding::Down)
            .ok_or(PoolError::DivisionByZero)?;
        let share_b = amount_b
            .checked_mul(&total)
            .ok_or(PoolError::Overflow("mint numerator b"))?
            .checked_div(&self.reserve_b, Rounding::Down)
            .ok_or(PoolError::DivisionByZero)?;

        Ok(Shares::new(share_a.min(share_b).get()))
    }

    // -- Withdrawal ---------------------------------------------------------

    /// Plans burning `shares` held by `holder` for a proportional cut of
    /// both reserves, floor-rounded.
    ///
    /// # Errors
    ///
    /// - [`PoolError::ZeroAmount`] if `shares` is zero.
    /// - [`PoolError::InsufficientBalance`] if `holder` owns fewer shares.
    /// - [`PoolError::Overflow`] if `shares × reserve` overflows.
    pub(crate) fn plan_withdrawal(&self, holder: AccountId, shares: Shares) -> Result<WithdrawalPlan> {
        if shares.is_zero() {
            return Err(PoolError::ZeroAmount);
        }
        let balance = self.shares_of(holder);
        if balance < shares {
            return Err(PoolError::InsufficientBalance);
        }

        // balance >= shares > 0 implies a non-empty pool.
        let total = Amount::new(self.total_shares.get());
        let amount_a = shares
            .checked_mul_amount(&self.reserve_a)
            .ok_or(PoolError::Overflow("withdrawal numerator a"))?
            .checked_div(&total, Rounding::Down)
            .ok_or(PoolError::DivisionByZero)?;
        let amount_b = shares
            .checked_mul_amount(&self.reserve_b)
            .ok_or(PoolError::Overflow("withdrawal numerator b"))?
            .checked_div(&total, Rounding::Down)
            .ok_or(PoolError::DivisionByZero)?;

        let new_reserve_a = self
            .reserve_a
            .checked_sub(&amount_a)
            .ok_or(PoolError::Overflow("reserve_a underflow"))?;
        let new_reserve_b = self
            .reserve_b
            .checked_sub(&amount_b)
            .ok_or(PoolError::Overflow("reserve_b underflow"))?;
        let new_total = self
            .total_shares
            .checked_sub(&shares)
            .ok_or(PoolError::Overflow("total shares underflow"))?;
        let new_holder_balance = balance
            .checked_sub(&shares)
            .ok_or(PoolError::Overflow("holder balance underflow"))?;

        Ok(WithdrawalPlan {
            amount_a,
            amount_b,
            burned: shares,
            new_reserve_a,
            new_reserve_b,
            new_total,
            new_holder_balance,
        })
    }

    /// Commits a planned withdrawal, burning the holder's shares.
    pub(crate) fn commit_withdrawal(&mut self, plan: &WithdrawalPlan, holder: AccountId) {
        self.reserve_a = plan.new_reserve_a;
        self.reserve_b = plan.new_reserve_b;
        self.total_shares = plan.new_total;
        if plan.new_holder_balance.is_zero() {
            self.share_balances.remove(&holder);
        } else {
            self.share_balances.insert(holder, plan.new_holder_balance);
        }
    }

    // -- Swap ---------------------------------------------------------------

    /// Plans a swap of `amount_in` of `asset_in` against this pool.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InsufficientLiquidity`] if the pool is empty.
    /// - [`PoolError::InvalidInput`] if `asset_in` is not in the pair or
    ///   `amount_in` is zero.
    /// - [`PoolError::Overflow`] if the pricing product or the reserve
    ///   update overflows.
    pub(crate) fn plan_swap(&self, asset_in: AssetId, amount_in: Amount) -> Result<SwapPlan> {
        if self.is_empty() {
            return Err(PoolError::InsufficientLiquidity);
        }
        let (reserve_in, reserve_out) = self.oriented_reserves(asset_in)?;
        let amount_out = pricing::get_amount_out(amount_in, reserve_in, reserve_out)?;

        let new_reserve_in = reserve_in
            .checked_add(&amount_in)
            .ok_or(PoolError::Overflow("reserve_in update"))?;
        // amount_out < reserve_out is guaranteed by the pricing curve.
        let new_reserve_out = reserve_out
            .checked_sub(&amount_out)
            .ok_or(PoolError::Overflow("reserve_out underflow"))?;

        Ok(SwapPlan {
            asset_in,
            amount_in,
            amount_out,
            new_reserve_in,
            new_reserve_out,
        })
    }

    /// Commits a planned swap.
    pub(crate) fn commit_swap(&mut self, plan: &SwapPlan) {
        if plan.asset_in == self.pair.first() {
            self.reserve_a = plan.new_reserve_in;
            self.reserve_b = plan.new_reserve_out;
        } else {
            self.reserve_b = plan.new_reserve_in;
            self.reserve_a = plan.new_reserve_out;
        }
    }
}
