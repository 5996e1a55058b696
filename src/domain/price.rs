//! Fixed-point spot exchange rate.

use core::fmt;

use super::{Amount, Rounding};
use crate::error::{PoolError, Result};

/// Number of fixed-point fraction units per whole unit (`10^18`).
pub const PRICE_SCALE: u128 = 1_000_000_000_000_000_000;

/// Spot exchange rate between two assets as a scaled integer ratio.
///
/// A `Price` of `PRICE_SCALE` means 1:1. The value is
/// `quote_reserve × PRICE_SCALE / base_reserve`, floor-rounded, so the
/// rate survives integer arithmetic without precision loss beyond the
/// final floor.
///
/// # Examples
///
/// ```
/// use pairswap::domain::{Amount, Price, PRICE_SCALE};
///
/// let price = Price::from_reserves(Amount::new(2_000), Amount::new(1_000)).expect("non-zero base");
/// assert_eq!(price.get(), 2 * PRICE_SCALE);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(u128);

impl Price {
    /// A 1:1 exchange rate.
    pub const ONE: Self = Self(PRICE_SCALE);

    /// Creates a `Price` from an already-scaled raw value.
    #[must_use]
    pub const fn from_scaled(value: u128) -> Self {
        Self(value)
    }

    /// Returns the scaled raw value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Computes the rate `quote_reserve / base_reserve` in fixed point.
    ///
    /// # Errors
    ///
    /// - [`PoolError::DivisionByZero`] if `base_reserve` is zero.
    /// - [`PoolError::Overflow`] if `quote_reserve × PRICE_SCALE` exceeds
    ///   `u128`.
    pub fn from_reserves(quote_reserve: Amount, base_reserve: Amount) -> Result<Self> {
        if base_reserve.is_zero() {
            return Err(PoolError::DivisionByZero);
        }
        let scaled = quote_reserve
            .checked_mul(&Amount::new(PRICE_SCALE))
            .ok_or(PoolError::Overflow("price numerator"))?;
        let ratio = scaled
            .checked_div(&base_reserve, Rounding::Down)
            .ok_or(PoolError::DivisionByZero)?;
        Ok(Self(ratio.get()))
    }

    /// Computes the reciprocal rate (`1 / self`) in fixed point.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::DivisionByZero`] if the price is zero.
    pub fn inverse(&self) -> Result<Self> {
        if self.0 == 0 {
            return Err(PoolError::DivisionByZero);
        }
        // PRICE_SCALE^2 fits in u128 (10^36 < 2^128).
        Ok(Self(PRICE_SCALE * PRICE_SCALE / self.0))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:018}", self.0 / PRICE_SCALE, self.0 % PRICE_SCALE)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    // -- from_reserves ------------------------------------------------------

    #[test]
    fn equal_reserves_is_one() {
        let Ok(p) = Price::from_reserves(Amount::new(1_000), Amount::new(1_000)) else {
            panic!("expected Ok");
        };
        assert_eq!(p, Price::ONE);
    }

    #[test]
    fn double_quote_doubles_price() {
        let Ok(p) = Price::from_reserves(Amount::new(2_000), Amount::new(1_000)) else {
            panic!("expected Ok");
        };
        assert_eq!(p.get(), 2 * PRICE_SCALE);
    }

    #[test]
    fn fractional_rate_floors() {
        // 1/3 in fixed point: floor(1 * 1e18 / 3)
        let Ok(p) = Price::from_reserves(Amount::new(1), Amount::new(3)) else {
            panic!("expected Ok");
        };
        assert_eq!(p.get(), PRICE_SCALE / 3);
    }

    #[test]
    fn zero_base_rejected() {
        assert_eq!(
            Price::from_reserves(Amount::new(1_000), Amount::ZERO),
            Err(PoolError::DivisionByZero)
        );
    }

    #[test]
    fn huge_quote_overflows() {
        let result = Price::from_reserves(Amount::MAX, Amount::new(1));
        assert!(matches!(result, Err(PoolError::Overflow(_))));
    }

    // -- inverse ------------------------------------------------------------

    #[test]
    fn inverse_of_two_is_half() {
        let Ok(p) = Price::from_reserves(Amount::new(2_000), Amount::new(1_000)) else {
            panic!("expected Ok");
        };
        let Ok(inv) = p.inverse() else {
            panic!("expected Ok");
        };
        assert_eq!(inv.get(), PRICE_SCALE / 2);
    }

    #[test]
    fn inverse_of_zero_rejected() {
        assert_eq!(
            Price::from_scaled(0).inverse(),
            Err(PoolError::DivisionByZero)
        );
    }

    // -- Display ------------------------------------------------------------

    #[test]
    fn display_shows_decimal_point() {
        let p = Price::from_scaled(PRICE_SCALE + PRICE_SCALE / 2);
        assert_eq!(format!("{p}"), "1.500000000000000000");
    }

    #[test]
    fn ordering() {
        assert!(Price::from_scaled(1) < Price::ONE);
    }
}
