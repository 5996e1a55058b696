//! Convenience re-exports for common types and traits.
//!
//! A single import brings the whole working set into scope:
//!
//! ```rust
//! use pairswap::prelude::*;
//! ```

pub use crate::assets::InMemoryAssets;
pub use crate::config::LedgerConfig;
pub use crate::domain::{
    AccountId, Amount, AssetId, AssetPair, DepositReceipt, Price, Rounding, Shares, Timestamp,
    WithdrawalReceipt, PRICE_SCALE,
};
pub use crate::error::{PoolError, Result};
pub use crate::ledger::PoolLedger;
pub use crate::pricing::{get_amount_out, quote};
pub use crate::traits::AssetTransfer;
