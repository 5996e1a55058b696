//! Seconds-precision time points for deadline checks.

use core::fmt;

/// A point in time, in seconds since an arbitrary epoch.
///
/// The ledger never reads a clock itself: every mutating operation takes
/// the current time as an argument and evaluates its deadline against it
/// exactly once. Tests pass fixed values.
///
/// # Examples
///
/// ```
/// use pairswap::domain::Timestamp;
///
/// let now = Timestamp::new(1_000);
/// let deadline = Timestamp::new(1_060);
/// assert!(!deadline.is_before(now));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Timestamp(u64);

impl Timestamp {
    /// Creates a new `Timestamp` from raw seconds.
    #[must_use]
    pub const fn new(seconds: u64) -> Self {
        Self(seconds)
    }

    /// Returns the underlying seconds value.
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }

    /// Returns `true` if `self` lies strictly before `other`.
    ///
    /// A deadline equal to the current time is still valid.
    #[must_use]
    pub const fn is_before(&self, other: Self) -> bool {
        self.0 < other.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}
