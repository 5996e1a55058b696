//! Pure constant-product pricing.
//!
//! The swap invariant is `x × y = k` where `x` and `y` are the reserves
//! of the two assets. No fee is deducted: the full input amount enters
//! the pricing formula, so `k` is preserved up to floor rounding.
//!
//! # Swap Algorithm (asset A → asset B)
//!
//! 1. `amount_out = reserve_b × amount_in / (reserve_a + amount_in)` (floor)
//! 2. `reserve_a += amount_in`
//! 3. `reserve_b -= amount_out`
//!
//! Because the output is floor-rounded, `k_after ≥ k_before` for every
//! swap, and `amount_out < reserve_b` for every finite input — the curve
//! approaches the reserve asymptotically and never drains it.
//!
//! Everything in this module is stateless; the ledger calls in with the
//! current reserves and applies the result itself.

use crate::domain::{Amount, Rounding};
use crate::error::{PoolError, Result};

/// Computes the swap output for an exact input against given reserves.
///
/// Formula: `amount_out = floor(amount_in × reserve_out / (reserve_in + amount_in))`.
///
/// The result is monotonically non-decreasing in `amount_in` for fixed
/// reserves and strictly less than `reserve_out`.
///
/// # Errors
///
/// - [`PoolError::InvalidInput`] if any argument is zero.
/// - [`PoolError::Overflow`] if `amount_in × reserve_out` exceeds `u128`.
///
/// # Examples
///
/// ```
/// use pairswap::domain::Amount;
/// use pairswap::pricing::get_amount_out;
///
/// let out = get_amount_out(Amount::new(100), Amount::new(1_000), Amount::new(1_000))
///     .expect("valid inputs");
/// assert_eq!(out, Amount::new(90));
/// ```
pub fn get_amount_out(amount_in: Amount, reserve_in: Amount, reserve_out: Amount) -> Result<Amount> {
    if amount_in.is_zero() {
        return Err(PoolError::InvalidInput("amount_in must be positive"));
    }
    if reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(PoolError::InvalidInput("reserves must be positive"));
    }

    let numerator = amount_in
        .checked_mul(&reserve_out)
        .ok_or(PoolError::Overflow("swap numerator"))?;
    let denominator = reserve_in
        .checked_add(&amount_in)
        .ok_or(PoolError::Overflow("swap denominator"))?;

    numerator
        .checked_div(&denominator, Rounding::Down)
        .ok_or(PoolError::DivisionByZero)
}

/// Computes the ratio-preserving counterpart of a deposit amount.
///
/// Given `amount_a` of the base asset and the current reserves, returns
/// `floor(amount_a × reserve_b / reserve_a)` — the quantity of the other
/// asset that keeps the pool ratio unchanged.
///
/// # Errors
///
/// - [`PoolError::InvalidInput`] if any argument is zero.
/// - [`PoolError::Overflow`] if `amount_a × reserve_b` exceeds `u128`.
pub fn quote(amount_a: Amount, reserve_a: Amount, reserve_b: Amount) -> Result<Amount> {
    if amount_a.is_zero() {
        return Err(PoolError::InvalidInput("amount must be positive"));
    }
    if reserve_a.is_zero() || reserve_b.is_zero() {
        return Err(PoolError::InvalidInput("reserves must be positive"));
    }

    let numerator = amount_a
        .checked_mul(&reserve_b)
        .ok_or(PoolError::Overflow("quote numerator"))?;

    numerator
        .checked_div(&reserve_a, Rounding::Down)
        .ok_or(PoolError::DivisionByZero)
}

/// Integer square root via Newton's method, rounding down.
///
/// Used for bootstrap share minting: the first deposit into an empty pool
/// mints `isqrt(amount_a × amount_b)` shares.
#[must_use]
pub fn isqrt(n: u128) -> u128 {
    if n == 0 {
        return 0;
    }
    let mut x = n;
    let mut y = x.div_ceil(2);
    while y < x {
        x = y;
        y = (x + n / x) / 2;
    }
    x
}
