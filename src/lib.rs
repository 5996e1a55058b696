//! # pairswap
//!
//! A two-token automated liquidity pool: depositors supply a pair of
//! fungible assets and receive ownership shares; traders exchange one
//! asset for the other against the pool's reserves under the
//! constant-product rule (`x · y = k`).
//!
//! The crate is the **ledger and pricing engine** only. Asset custody
//! stays with an external balance ledger reached through the
//! [`AssetTransfer`](traits::AssetTransfer) trait; everything here is
//! integer arithmetic over explicit state, so the whole system runs in
//! memory under test.
//!
//! # Quick Start
//!
//! ```rust
//! use pairswap::prelude::*;
//!
//! let gold = AssetId::from_bytes([1u8; 32]);
//! let iron = AssetId::from_bytes([2u8; 32]);
//! let alice = AccountId::from_bytes([10u8; 32]);
//! let vault = AccountId::from_bytes([99u8; 32]);
//!
//! // Fund the depositor and let the ledger's reserve account pull.
//! let mut assets = InMemoryAssets::new();
//! assets.mint(gold, alice, Amount::new(10_000));
//! assets.mint(iron, alice, Amount::new(10_000));
//! assets.approve(gold, alice, vault, Amount::new(10_000));
//! assets.approve(iron, alice, vault, Amount::new(10_000));
//!
//! let config = LedgerConfig::new(vault).expect("valid config");
//! let mut ledger = PoolLedger::new(config, assets);
//!
//! // First deposit creates the pool and mints isqrt(a × b) shares.
//! let receipt = ledger
//!     .add_liquidity(
//!         alice,
//!         gold,
//!         iron,
//!         Amount::new(1_000),
//!         Amount::new(1_000),
//!         Amount::ZERO,
//!         Amount::ZERO,
//!         alice,
//!         Timestamp::new(60),
//!         Timestamp::new(0),
//!     )
//!     .expect("deposit succeeded");
//! assert_eq!(receipt.shares_minted(), Shares::new(1_000));
//!
//! // Trade against the pool.
//! let out = ledger
//!     .swap_exact_in(
//!         alice,
//!         Amount::new(100),
//!         Amount::ZERO,
//!         &[gold, iron],
//!         alice,
//!         Timestamp::new(60),
//!         Timestamp::new(0),
//!     )
//!     .expect("swap succeeded");
//! assert_eq!(out, Amount::new(90));
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │    Caller     │  deposits, withdrawals, swaps, quotes
//! └──────┬───────┘
//!        │ add_liquidity / remove_liquidity / swap_exact_in / price_of
//!        ▼
//! ┌──────────────┐     ┌────────────────────┐
//! │  PoolLedger   │ ──► │   AssetTransfer     │  external balance ledger
//! └──────┬───────┘     └────────────────────┘
//!        │ plan / commit
//!        ▼
//! ┌──────────────┐
//! │     Pool      │  reserves, share supply, share balances
//! └──────┬───────┘
//!        │ get_amount_out / quote / isqrt
//!        ▼
//! ┌──────────────┐
//! │   pricing     │  pure constant-product arithmetic
//! └──────────────┘
//! ```
//!
//! Every mutating operation is atomic: post-state is planned and
//! validated on copies, asset transfers run next, and pool state is
//! committed only after every transfer has succeeded.
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Amount`](domain::Amount), [`Shares`](domain::Shares), [`AssetPair`](domain::AssetPair), [`Price`](domain::Price), … |
//! | [`pricing`] | Pure constant-product math: [`get_amount_out`](pricing::get_amount_out), [`quote`](pricing::quote), [`isqrt`](pricing::isqrt) |
//! | [`pool`] | Per-pair reserve and share-ledger state with plan/commit transitions |
//! | [`ledger`] | [`PoolLedger`](ledger::PoolLedger): the pool store and every operation |
//! | [`traits`] | [`AssetTransfer`](traits::AssetTransfer) boundary to the external balance ledger |
//! | [`assets`] | [`InMemoryAssets`](assets::InMemoryAssets) reference implementation |
//! | [`config`] | [`LedgerConfig`](config::LedgerConfig) validated construction parameters |
//! | [`error`] | [`PoolError`](error::PoolError) unified error enum |
//! | [`prelude`] | Convenience re-exports |

pub mod assets;
pub mod config;
pub mod domain;
pub mod error;
pub mod ledger;
pub mod pool;
pub mod prelude;
pub mod pricing;
pub mod traits;
