//! Settlement receipts returned by ledger operations.

use core::fmt;

use super::{Amount, Shares};

/// The settled outcome of a liquidity deposit.
///
/// Records the amounts actually accepted (which may be less than the
/// desired amounts on a ratio-preserving deposit) and the shares minted
/// for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DepositReceipt {
    amount_a: Amount,
    amount_b: Amount,
    shares_minted: Shares,
}

impl DepositReceipt {
    /// Creates a new receipt. Amounts are in the caller's asset order.
    #[must_use]
    pub const fn new(amount_a: Amount, amount_b: Amount, shares_minted: Shares) -> Self {
        Self {
            amount_a,
            amount_b,
            shares_minted,
        }
    }

    /// Returns the accepted amount of the caller's first asset.
    #[must_use]
    pub const fn amount_a(&self) -> Amount {
        self.amount_a
    }

    /// Returns the accepted amount of the caller's second asset.
    #[must_use]
    pub const fn amount_b(&self) -> Amount {
        self.amount_b
    }

    /// Returns the shares minted to the recipient.
    #[must_use]
    pub const fn shares_minted(&self) -> Shares {
        self.shares_minted
    }
}

impl fmt::Display for DepositReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "deposited ({}, {}) for {} shares",
            self.amount_a, self.amount_b, self.shares_minted
        )
    }
}

/// The settled outcome of a liquidity withdrawal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WithdrawalReceipt {
    amount_a: Amount,
    amount_b: Amount,
}

impl WithdrawalReceipt {
    /// Creates a new receipt. Amounts are in the caller's asset order.
    #[must_use]
    pub const fn new(amount_a: Amount, amount_b: Amount) -> Self {
        Self { amount_a, amount_b }
    }

    /// Returns the withdrawn amount of the caller's first asset.
    #[must_use]
    pub const fn amount_a(&self) -> Amount {
        self.amount_a
    }

    /// Returns the withdrawn amount of the caller's second asset.
    #[must_use]
    pub const fn amount_b(&self) -> Amount {
        self.amount_b
    }
}

impl fmt::Display for WithdrawalReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "withdrew ({}, {})", self.amount_a, self.amount_b)
    }
}
