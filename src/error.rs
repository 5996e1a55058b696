//! Unified error types for the pairswap library.
//!
//! All fallible operations across the crate return [`PoolError`] as their
//! error type. Every variant is terminal for the operation that produced
//! it: the ledger never retries internally and never commits partial
//! state, so a caller must construct a new call with corrected parameters.

use thiserror::Error;

/// Errors produced by ledger operations and pricing calculations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PoolError {
    /// The operation's deadline lies in the past.
    #[error("deadline has passed")]
    Expired,

    /// A required positive quantity was zero.
    #[error("amount must be positive")]
    ZeroAmount,

    /// A pricing input was outside the valid domain.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    /// Both asset identifiers in a pair are equal.
    #[error("asset pair requires two distinct assets")]
    IdenticalAssets,

    /// A swap path was too short or malformed.
    #[error("invalid swap path: {0}")]
    InvalidPath(&'static str),

    /// No pool exists for the requested asset pair.
    #[error("no pool exists for the requested pair")]
    PoolNotFound,

    /// Pool reserves cannot satisfy the request.
    #[error("pool reserves cannot satisfy the request")]
    InsufficientLiquidity,

    /// A deposit computed to zero shares.
    #[error("deposit too small to mint any shares")]
    InsufficientLiquidityMinted,

    /// The caller holds fewer shares than the withdrawal requires.
    #[error("holder lacks sufficient share balance")]
    InsufficientBalance,

    /// A computed amount violated a caller-specified minimum bound.
    #[error("computed amount violates the caller-specified bound")]
    SlippageExceeded,

    /// The external asset ledger rejected a transfer.
    #[error("asset transfer failed: {0}")]
    TransferFailed(&'static str),

    /// A division had a zero divisor.
    #[error("division by zero")]
    DivisionByZero,

    /// Integer arithmetic overflowed.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, PoolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(PoolError::Expired.to_string(), "deadline has passed");
        assert_eq!(
            PoolError::Overflow("reserve update").to_string(),
            "arithmetic overflow: reserve update"
        );
        assert_eq!(
            PoolError::InvalidInput("zero reserve").to_string(),
            "invalid input: zero reserve"
        );
    }

    #[test]
    fn equality() {
        assert_eq!(PoolError::PoolNotFound, PoolError::PoolNotFound);
        assert_ne!(PoolError::PoolNotFound, PoolError::Expired);
        assert_ne!(PoolError::Overflow("a"), PoolError::Overflow("b"));
    }

    #[test]
    fn copy_semantics() {
        let e = PoolError::SlippageExceeded;
        let f = e;
        assert_eq!(e, f);
    }
}
