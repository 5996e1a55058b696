//! Boundary abstractions the pool ledger depends on.
//!
//! The only seam is [`AssetTransfer`]: the external balance ledger that
//! actually moves the traded assets. The pool ledger is generic over it
//! so tests run against an in-memory fixture.

mod asset_transfer;

pub use asset_transfer::AssetTransfer;
