//! Ledger construction parameters.

use crate::domain::AccountId;
use crate::error::{PoolError, Result};

/// Validated configuration for a [`PoolLedger`](crate::ledger::PoolLedger).
///
/// The only parameter is the ledger's own reserve account: the identity
/// under which the external asset ledger holds every pool's reserves.
///
/// # Validation
///
/// The reserve account must not be the all-zero sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerConfig {
    reserve_account: AccountId,
}

impl LedgerConfig {
    /// Creates a new `LedgerConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidInput`] if `reserve_account` is the
    /// all-zero sentinel account.
    pub fn new(reserve_account: AccountId) -> Result<Self> {
        let config = Self { reserve_account };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidInput`] if the reserve account is the
    /// zero sentinel.
    pub fn validate(&self) -> Result<()> {
        if self.reserve_account.is_zero() {
            return Err(PoolError::InvalidInput(
                "reserve account must not be the zero sentinel",
            ));
        }
        Ok(())
    }

    /// Returns the ledger's reserve account.
    #[must_use]
    pub const fn reserve_account(&self) -> AccountId {
        self.reserve_account
    }
}
