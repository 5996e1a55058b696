//! Unordered pair of distinct assets with a canonical storage order.

use super::AssetId;
use crate::error::{PoolError, Result};

/// A pair of distinct assets, canonically sorted by identifier.
///
/// Lookup treats the pair as unordered — `(A, B)` and `(B, A)` resolve to
/// the same pair — but the canonical ordering fixed here at construction
/// (`first() < second()` by identifier bytes) is what the pool uses for
/// reserve storage, so duplicate pools for the same two assets cannot
/// exist.
///
/// # Examples
///
/// ```
/// use pairswap::domain::{AssetId, AssetPair};
///
/// let a = AssetId::from_bytes([1u8; 32]);
/// let b = AssetId::from_bytes([2u8; 32]);
///
/// // Order of arguments does not matter:
/// let pair = AssetPair::new(b, a).expect("distinct assets");
/// assert_eq!(pair.first(), a);
/// assert_eq!(pair.second(), b);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AssetPair {
    first: AssetId,
    second: AssetId,
}

impl AssetPair {
    /// Creates a canonically-ordered `AssetPair`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::IdenticalAssets`] if both identifiers are equal.
    pub fn new(asset_a: AssetId, asset_b: AssetId) -> Result<Self> {
        if asset_a == asset_b {
            return Err(PoolError::IdenticalAssets);
        }
        let (first, second) = if asset_a < asset_b {
            (asset_a, asset_b)
        } else {
            (asset_b, asset_a)
        };
        Ok(Self { first, second })
    }

    /// Returns the canonically-first asset (lower identifier).
    #[must_use]
    pub const fn first(&self) -> AssetId {
        self.first
    }

    /// Returns the canonically-second asset (higher identifier).
    #[must_use]
    pub const fn second(&self) -> AssetId {
        self.second
    }

    /// Returns `true` if the given asset is part of this pair.
    #[must_use]
    pub fn contains(&self, asset: AssetId) -> bool {
        self.first == asset || self.second == asset
    }

    /// Returns the counterpart of `asset` in this pair.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidInput`] if `asset` is not in the pair.
    pub fn other(&self, asset: AssetId) -> Result<AssetId> {
        if asset == self.first {
            Ok(self.second)
        } else if asset == self.second {
            Ok(self.first)
        } else {
            Err(PoolError::InvalidInput("asset is not part of this pair"))
        }
    }
}
