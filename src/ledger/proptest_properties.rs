//! Property-based tests using `proptest` for ledger and pricing invariants.
//!
//! Covered properties:
//!
//! 1. **Invariant preservation** — `reserve_in × reserve_out` never
//!    decreases across a swap.
//! 2. **Monotonicity** — a larger input never buys a smaller output.
//! 3. **Output bound** — the output never reaches the output reserve.
//! 4. **Round trip** — depositing then withdrawing all minted shares
//!    returns at most the deposited amounts.
//! 5. **Conservation** — a swap moves assets between trader and reserve
//!    account without creating or destroying any.

use proptest::prelude::*;

use crate::assets::InMemoryAssets;
use crate::config::LedgerConfig;
use crate::domain::{AccountId, Amount, AssetId, Timestamp};
use crate::ledger::PoolLedger;
use crate::pricing;
use crate::traits::AssetTransfer;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn asset(byte: u8) -> AssetId {
    AssetId::from_bytes([byte; 32])
}

fn account(byte: u8) -> AccountId {
    AccountId::from_bytes([byte; 32])
}

fn vault() -> AccountId {
    account(99)
}

fn now() -> Timestamp {
    Timestamp::new(1_000)
}

fn deadline() -> Timestamp {
    Timestamp::new(2_000)
}

/// A ledger with one trader and one liquidity provider funded far beyond
/// any generated amount.
fn funded_ledger() -> PoolLedger<InMemoryAssets> {
    let stock = Amount::new(u128::from(u64::MAX));
    let mut assets = InMemoryAssets::new();
    for holder in [account(10), account(11)] {
        for id in [asset(1), asset(2)] {
            assets.mint(id, holder, stock);
            assets.approve(id, holder, vault(), stock);
        }
    }
    let Ok(config) = LedgerConfig::new(vault()) else {
        panic!("valid config");
    };
    PoolLedger::new(config, assets)
}

/// Reserve values away from extremes so products stay well inside `u128`.
fn reserve_strategy() -> impl Strategy<Value = u128> {
    1_000u128..=10_000_000u128
}

/// Swap inputs up to the size of the smaller reserve bound.
fn amount_strategy() -> impl Strategy<Value = u128> {
    1u128..=1_000_000u128
}

// ---------------------------------------------------------------------------
// Pricing properties
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_swap_invariant_non_decreasing(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        x in amount_strategy(),
    ) {
        let Ok(out) = pricing::get_amount_out(
            Amount::new(x),
            Amount::new(ra),
            Amount::new(rb),
        ) else {
            return Ok(());
        };
        let k_before = ra * rb;
        let k_after = (ra + x) * (rb - out.get());
        prop_assert!(
            k_after >= k_before,
            "k shrank: {k_after} < {k_before} (ra={ra}, rb={rb}, x={x})"
        );
    }

    #[test]
    fn prop_get_amount_out_monotone(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        x1 in amount_strategy(),
        x2 in amount_strategy(),
    ) {
        let (lo, hi) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
        let Ok(out_lo) = pricing::get_amount_out(
            Amount::new(lo),
            Amount::new(ra),
            Amount::new(rb),
        ) else {
            return Ok(());
        };
        let Ok(out_hi) = pricing::get_amount_out(
            Amount::new(hi),
            Amount::new(ra),
            Amount::new(rb),
        ) else {
            return Ok(());
        };
        prop_assert!(out_lo <= out_hi);
    }

    #[test]
    fn prop_output_below_reserve_out(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        x in amount_strategy(),
    ) {
        let Ok(out) = pricing::get_amount_out(
            Amount::new(x),
            Amount::new(ra),
            Amount::new(rb),
        ) else {
            return Ok(());
        };
        prop_assert!(out.get() < rb);
    }
}

// ---------------------------------------------------------------------------
// Ledger properties
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_deposit_withdraw_round_trip(
        a in reserve_strategy(),
        b in reserve_strategy(),
    ) {
        let mut ledger = funded_ledger();
        let Ok(receipt) = ledger.add_liquidity(
            account(10),
            asset(1),
            asset(2),
            Amount::new(a),
            Amount::new(b),
            Amount::ZERO,
            Amount::ZERO,
            account(10),
            deadline(),
            now(),
        ) else {
            return Ok(());
        };
        let Ok(withdrawal) = ledger.remove_liquidity(
            account(10),
            asset(1),
            asset(2),
            receipt.shares_minted(),
            Amount::ZERO,
            Amount::ZERO,
            account(10),
            deadline(),
            now(),
        ) else {
            return Ok(());
        };
        prop_assert!(withdrawal.amount_a() <= receipt.amount_a());
        prop_assert!(withdrawal.amount_b() <= receipt.amount_b());
    }

    #[test]
    fn prop_second_deposit_never_overpays_shares(
        a in reserve_strategy(),
        b in reserve_strategy(),
        da in amount_strategy(),
    ) {
        let mut ledger = funded_ledger();
        let Ok(first) = ledger.add_liquidity(
            account(10),
            asset(1),
            asset(2),
            Amount::new(a),
            Amount::new(b),
            Amount::ZERO,
            Amount::ZERO,
            account(10),
            deadline(),
            now(),
        ) else {
            return Ok(());
        };
        let Ok(second) = ledger.add_liquidity(
            account(11),
            asset(1),
            asset(2),
            Amount::new(da),
            Amount::new(u128::from(u32::MAX)),
            Amount::ZERO,
            Amount::ZERO,
            account(11),
            deadline(),
            now(),
        ) else {
            return Ok(());
        };
        // minted / total must not exceed the deposited share of the
        // post-deposit reserve: minted ≤ da × total / reserve_a.
        let total_before = first.shares_minted().get();
        let bound = second.amount_a().get() * total_before / first.amount_a().get();
        prop_assert!(
            second.shares_minted().get() <= bound,
            "minted {} exceeds proportional bound {bound}",
            second.shares_minted().get()
        );
    }

    #[test]
    fn prop_swap_conserves_assets(
        a in reserve_strategy(),
        b in reserve_strategy(),
        x in amount_strategy(),
    ) {
        let mut ledger = funded_ledger();
        let Ok(_) = ledger.add_liquidity(
            account(10),
            asset(1),
            asset(2),
            Amount::new(a),
            Amount::new(b),
            Amount::ZERO,
            Amount::ZERO,
            account(10),
            deadline(),
            now(),
        ) else {
            return Ok(());
        };

        let holders = [account(10), account(11), vault()];
        let supply_of = |ledger: &PoolLedger<InMemoryAssets>, id: AssetId| -> u128 {
            holders
                .iter()
                .map(|h| ledger.assets().balance_of(id, *h).get())
                .sum()
        };
        let supply_1 = supply_of(&ledger, asset(1));
        let supply_2 = supply_of(&ledger, asset(2));

        let Ok(_) = ledger.swap_exact_in(
            account(11),
            Amount::new(x),
            Amount::ZERO,
            &[asset(1), asset(2)],
            account(11),
            deadline(),
            now(),
        ) else {
            return Ok(());
        };

        prop_assert_eq!(supply_of(&ledger, asset(1)), supply_1);
        prop_assert_eq!(supply_of(&ledger, asset(2)), supply_2);
    }

    #[test]
    fn prop_swap_moves_price_against_buyer(
        a in reserve_strategy(),
        b in reserve_strategy(),
        x in amount_strategy(),
    ) {
        let mut ledger = funded_ledger();
        let Ok(_) = ledger.add_liquidity(
            account(10),
            asset(1),
            asset(2),
            Amount::new(a),
            Amount::new(b),
            Amount::ZERO,
            Amount::ZERO,
            account(10),
            deadline(),
            now(),
        ) else {
            return Ok(());
        };
        let Ok(price_before) = ledger.price_of(asset(1), asset(2)) else {
            return Ok(());
        };
        let Ok(_) = ledger.swap_exact_in(
            account(11),
            Amount::new(x),
            Amount::ZERO,
            &[asset(1), asset(2)],
            account(11),
            deadline(),
            now(),
        ) else {
            return Ok(());
        };
        let Ok(price_after) = ledger.price_of(asset(1), asset(2)) else {
            return Ok(());
        };
        // Selling asset 1 into the pool cheapens it: fewer units of
        // asset 2 per unit of asset 1 afterwards.
        prop_assert!(price_after <= price_before);
    }
}
