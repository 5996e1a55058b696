//! Ledger operations over the pool store.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use tracing::{debug, trace};

use crate::config::LedgerConfig;
use crate::domain::{
    AccountId, Amount, AssetId, AssetPair, DepositReceipt, Price, Shares, Timestamp,
    WithdrawalReceipt,
};
use crate::error::{PoolError, Result};
use crate::pool::Pool;
use crate::traits::AssetTransfer;

/// The liquidity-pool ledger.
///
/// Owns the store of pools (one per unordered asset pair) and executes
/// deposits, withdrawals, and swaps against it. Asset balances live with
/// the external [`AssetTransfer`] collaborator under the ledger's reserve
/// account; the ledger holds only reserve bookkeeping and the share
/// ledger.
///
/// # Atomicity
///
/// Every operation reads its `now` argument once, computes and validates
/// the complete post-state, runs the required asset transfers, and only
/// then commits pool state. Any failure — precondition, arithmetic, or
/// transfer — returns an error with no state committed. A deposit whose
/// second pull fails refunds the first before returning.
///
/// # Examples
///
/// ```
/// use pairswap::assets::InMemoryAssets;
/// use pairswap::config::LedgerConfig;
/// use pairswap::domain::{AccountId, Amount, AssetId, Timestamp};
/// use pairswap::ledger::PoolLedger;
///
/// let gold = AssetId::from_bytes([1u8; 32]);
/// let iron = AssetId::from_bytes([2u8; 32]);
/// let alice = AccountId::from_bytes([10u8; 32]);
/// let vault = AccountId::from_bytes([99u8; 32]);
///
/// let mut assets = InMemoryAssets::new();
/// assets.mint(gold, alice, Amount::new(10_000));
/// assets.mint(iron, alice, Amount::new(10_000));
/// assets.approve(gold, alice, vault, Amount::new(10_000));
/// assets.approve(iron, alice, vault, Amount::new(10_000));
///
/// let config = LedgerConfig::new(vault).expect("valid config");
/// let mut ledger = PoolLedger::new(config, assets);
///
/// let receipt = ledger
///     .add_liquidity(
///         alice,
///         gold,
///         iron,
///         Amount::new(1_000),
///         Amount::new(1_000),
///         Amount::ZERO,
///         Amount::ZERO,
///         alice,
///         Timestamp::new(60),
///         Timestamp::new(0),
///     )
///     .expect("first deposit");
/// assert_eq!(receipt.shares_minted().get(), 1_000);
/// ```
#[derive(Debug, Clone)]
pub struct PoolLedger<A> {
    reserve_account: AccountId,
    pools: BTreeMap<AssetPair, Pool>,
    assets: A,
}

impl<A: AssetTransfer> PoolLedger<A> {
    /// Creates a ledger with an empty pool store.
    #[must_use]
    pub fn new(config: LedgerConfig, assets: A) -> Self {
        Self {
            reserve_account: config.reserve_account(),
            pools: BTreeMap::new(),
            assets,
        }
    }

    /// Returns the account under which reserves are held externally.
    #[must_use]
    pub const fn reserve_account(&self) -> AccountId {
        self.reserve_account
    }

    /// Returns a shared view of the asset collaborator.
    #[must_use]
    pub const fn assets(&self) -> &A {
        &self.assets
    }

    /// Returns a mutable view of the asset collaborator.
    ///
    /// Intended for funding and approving accounts in tests and tools;
    /// ledger operations themselves go through the trait.
    pub fn assets_mut(&mut self) -> &mut A {
        &mut self.assets
    }

    /// Returns the number of pools ever created.
    #[must_use]
    pub fn pool_count(&self) -> usize {
        self.pools.len()
    }

    /// Returns a read-only view of the pair's pool.
    ///
    /// # Errors
    ///
    /// - [`PoolError::IdenticalAssets`] if both assets are the same.
    /// - [`PoolError::PoolNotFound`] if no pool exists for the pair.
    pub fn pool(&self, asset_a: AssetId, asset_b: AssetId) -> Result<&Pool> {
        let pair = AssetPair::new(asset_a, asset_b)?;
        self.pools.get(&pair).ok_or(PoolError::PoolNotFound)
    }

    // -- Mutating operations --------------------------------------------------

    /// Deposits up to the desired amounts of a pair, minting shares.
    ///
    /// The pool for the pair is created on the first successful deposit.
    /// For a non-empty pool the accepted amounts are scaled down to the
    /// current reserve ratio; the caller bounds the scaling with
    /// `amount_a_min` / `amount_b_min`.
    ///
    /// Both accepted amounts are pulled from `caller` via the allowance
    /// mechanism, so the caller must have approved the ledger's reserve
    /// account beforehand.
    ///
    /// # Errors
    ///
    /// - [`PoolError::Expired`] if `deadline` lies before `now`.
    /// - [`PoolError::ZeroAmount`] if either desired amount is zero.
    /// - [`PoolError::IdenticalAssets`] if both assets are the same.
    /// - [`PoolError::SlippageExceeded`] if an accepted amount falls
    ///   below its minimum.
    /// - [`PoolError::InsufficientLiquidityMinted`] if the mint computes
    ///   to zero shares.
    /// - [`PoolError::TransferFailed`] if a pull from the caller fails.
    #[allow(clippy::too_many_arguments)]
    pub fn add_liquidity(
        &mut self,
        caller: AccountId,
        asset_a: AssetId,
        asset_b: AssetId,
        amount_a_desired: Amount,
        amount_b_desired: Amount,
        amount_a_min: Amount,
        amount_b_min: Amount,
        recipient: AccountId,
        deadline: Timestamp,
        now: Timestamp,
    ) -> Result<DepositReceipt> {
        if deadline.is_before(now) {
            return Err(PoolError::Expired);
        }
        if amount_a_desired.is_zero() || amount_b_desired.is_zero() {
            return Err(PoolError::ZeroAmount);
        }
        let pair = AssetPair::new(asset_a, asset_b)?;
        let straight = asset_a == pair.first();

        let (desired_first, desired_second) = if straight {
            (amount_a_desired, amount_b_desired)
        } else {
            (amount_b_desired, amount_a_desired)
        };

        let plan = match self.pools.get(&pair) {
            Some(pool) => pool.plan_deposit(desired_first, desired_second, recipient)?,
            None => Pool::new(pair).plan_deposit(desired_first, desired_second, recipient)?,
        };

        let (accepted_a, accepted_b) = if straight {
            (plan.amount_a, plan.amount_b)
        } else {
            (plan.amount_b, plan.amount_a)
        };
        if accepted_a < amount_a_min || accepted_b < amount_b_min {
            return Err(PoolError::SlippageExceeded);
        }

        self.pull_pair(caller, asset_a, accepted_a, asset_b, accepted_b)?;

        let pool = match self.pools.entry(pair) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                trace!(first = %pair.first(), second = %pair.second(), "pool created");
                entry.insert(Pool::new(pair))
            }
        };
        pool.commit_deposit(&plan, recipient);
        debug!(
            first = %pair.first(),
            second = %pair.second(),
            amount_a = %accepted_a,
            amount_b = %accepted_b,
            minted = %plan.minted,
            total = %pool.total_shares(),
            "liquidity added"
        );

        Ok(DepositReceipt::new(accepted_a, accepted_b, plan.minted))
    }

    /// Burns `shares_to_burn` of the caller's shares for a proportional
    /// cut of both reserves, pushed to `recipient`.
    ///
    /// # Errors
    ///
    /// - [`PoolError::Expired`] if `deadline` lies before `now`.
    /// - [`PoolError::ZeroAmount`] if `shares_to_burn` is zero.
    /// - [`PoolError::IdenticalAssets`] if both assets are the same.
    /// - [`PoolError::PoolNotFound`] if no pool exists for the pair.
    /// - [`PoolError::InsufficientBalance`] if the caller holds fewer
    ///   shares.
    /// - [`PoolError::SlippageExceeded`] if a computed amount falls below
    ///   its minimum.
    #[allow(clippy::too_many_arguments)]
    pub fn remove_liquidity(
        &mut self,
        caller: AccountId,
        asset_a: AssetId,
        asset_b: AssetId,
        shares_to_burn: Shares,
        amount_a_min: Amount,
        amount_b_min: Amount,
        recipient: AccountId,
        deadline: Timestamp,
        now: Timestamp,
    ) -> Result<WithdrawalReceipt> {
        if deadline.is_before(now) {
            return Err(PoolError::Expired);
        }
        if shares_to_burn.is_zero() {
            return Err(PoolError::ZeroAmount);
        }
        let pair = AssetPair::new(asset_a, asset_b)?;
        let straight = asset_a == pair.first();

        let pool = self.pools.get(&pair).ok_or(PoolError::PoolNotFound)?;
        let plan = pool.plan_withdrawal(caller, shares_to_burn)?;

        let (amount_a, amount_b) = if straight {
            (plan.amount_a, plan.amount_b)
        } else {
            (plan.amount_b, plan.amount_a)
        };
        if amount_a < amount_a_min || amount_b < amount_b_min {
            return Err(PoolError::SlippageExceeded);
        }

        self.push_pair(recipient, asset_a, amount_a, asset_b, amount_b)?;

        let pool = self.pools.get_mut(&pair).ok_or(PoolError::PoolNotFound)?;
        pool.commit_withdrawal(&plan, caller);
        debug!(
            first = %pair.first(),
            second = %pair.second(),
            amount_a = %amount_a,
            amount_b = %amount_b,
            burned = %shares_to_burn,
            total = %pool.total_shares(),
            "liquidity removed"
        );

        Ok(WithdrawalReceipt::new(amount_a, amount_b))
    }

    /// Swaps an exact input along `path`, one pool hop per consecutive
    /// asset pair, and pushes the final output to `recipient`.
    ///
    /// Each hop is priced against the reserves left by the previous hop;
    /// the slippage bound applies to the cumulative output only.
    ///
    /// # Errors
    ///
    /// - [`PoolError::Expired`] if `deadline` lies before `now`.
    /// - [`PoolError::ZeroAmount`] if `amount_in` is zero.
    /// - [`PoolError::InvalidPath`] if `path` has fewer than two assets
    ///   or repeats an asset consecutively.
    /// - [`PoolError::PoolNotFound`] if a hop has no pool.
    /// - [`PoolError::InsufficientLiquidity`] if a hop's pool is empty.
    /// - [`PoolError::SlippageExceeded`] if the cumulative output falls
    ///   below `amount_out_min`.
    /// - [`PoolError::TransferFailed`] if the input pull fails.
    #[allow(clippy::too_many_arguments)]
    pub fn swap_exact_in(
        &mut self,
        caller: AccountId,
        amount_in: Amount,
        amount_out_min: Amount,
        path: &[AssetId],
        recipient: AccountId,
        deadline: Timestamp,
        now: Timestamp,
    ) -> Result<Amount> {
        if deadline.is_before(now) {
            return Err(PoolError::Expired);
        }
        if amount_in.is_zero() {
            return Err(PoolError::ZeroAmount);
        }
        if path.len() < 2 {
            return Err(PoolError::InvalidPath("path must name at least two assets"));
        }

        // Stage every touched pool on a working copy so a pair crossed
        // twice sees its own earlier reserve updates, and nothing is
        // written until the whole path has settled.
        let mut staged: BTreeMap<AssetPair, Pool> = BTreeMap::new();
        let mut hop_in = amount_in;
        for window in path.windows(2) {
            let pair = AssetPair::new(window[0], window[1])
                .map_err(|_| PoolError::InvalidPath("path repeats an asset"))?;
            let pool = match staged.entry(pair) {
                Entry::Occupied(entry) => entry.into_mut(),
                Entry::Vacant(entry) => {
                    let pool = self.pools.get(&pair).ok_or(PoolError::PoolNotFound)?;
                    entry.insert(pool.clone())
                }
            };
            let plan = pool.plan_swap(window[0], hop_in)?;
            pool.commit_swap(&plan);
            hop_in = plan.amount_out;
        }
        let amount_out = hop_in;
        if amount_out < amount_out_min {
            return Err(PoolError::SlippageExceeded);
        }

        let asset_in = path[0];
        let asset_out = path[path.len() - 1];
        self.assets.transfer_from(
            self.reserve_account,
            asset_in,
            caller,
            self.reserve_account,
            amount_in,
        )?;
        if let Err(err) =
            self.assets
                .transfer(asset_out, self.reserve_account, recipient, amount_out)
        {
            self.assets
                .transfer(asset_in, self.reserve_account, caller, amount_in)?;
            return Err(err);
        }

        for (pair, pool) in staged {
            self.pools.insert(pair, pool);
        }
        debug!(
            asset_in = %asset_in,
            asset_out = %asset_out,
            amount_in = %amount_in,
            amount_out = %amount_out,
            hops = path.len() - 1,
            "swap settled"
        );

        Ok(amount_out)
    }

    // -- Read surface ---------------------------------------------------------

    /// Returns the spot rate `reserve_b / reserve_a` in the caller's
    /// orientation, as a fixed-point [`Price`].
    ///
    /// # Errors
    ///
    /// - [`PoolError::IdenticalAssets`] if both assets are the same.
    /// - [`PoolError::PoolNotFound`] if no pool exists for the pair.
    /// - [`PoolError::DivisionByZero`] if the pool is empty.
    pub fn price_of(&self, asset_a: AssetId, asset_b: AssetId) -> Result<Price> {
        let (reserve_a, reserve_b) = self.reserves(asset_a, asset_b)?;
        Price::from_reserves(reserve_b, reserve_a)
    }

    /// Returns the reserves for the pair in the caller's orientation.
    ///
    /// # Errors
    ///
    /// - [`PoolError::IdenticalAssets`] if both assets are the same.
    /// - [`PoolError::PoolNotFound`] if no pool exists for the pair.
    pub fn reserves(&self, asset_a: AssetId, asset_b: AssetId) -> Result<(Amount, Amount)> {
        let pair = AssetPair::new(asset_a, asset_b)?;
        let pool = self.pools.get(&pair).ok_or(PoolError::PoolNotFound)?;
        pool.oriented_reserves(asset_a)
    }

    /// Returns `holder`'s share balance in the pair's pool.
    ///
    /// # Errors
    ///
    /// - [`PoolError::IdenticalAssets`] if both assets are the same.
    /// - [`PoolError::PoolNotFound`] if no pool exists for the pair.
    pub fn share_balance_of(
        &self,
        asset_a: AssetId,
        asset_b: AssetId,
        holder: AccountId,
    ) -> Result<Shares> {
        let pair = AssetPair::new(asset_a, asset_b)?;
        let pool = self.pools.get(&pair).ok_or(PoolError::PoolNotFound)?;
        Ok(pool.shares_of(holder))
    }

    /// Returns the total share supply of the pair's pool.
    ///
    /// # Errors
    ///
    /// - [`PoolError::IdenticalAssets`] if both assets are the same.
    /// - [`PoolError::PoolNotFound`] if no pool exists for the pair.
    pub fn total_shares(&self, asset_a: AssetId, asset_b: AssetId) -> Result<Shares> {
        let pair = AssetPair::new(asset_a, asset_b)?;
        let pool = self.pools.get(&pair).ok_or(PoolError::PoolNotFound)?;
        Ok(pool.total_shares())
    }

    // -- Transfer helpers ------------------------------------------------------

    /// Pulls both legs of a deposit from `caller`, refunding the first
    /// leg if the second fails.
    fn pull_pair(
        &mut self,
        caller: AccountId,
        asset_a: AssetId,
        amount_a: Amount,
        asset_b: AssetId,
        amount_b: Amount,
    ) -> Result<()> {
        self.assets.transfer_from(
            self.reserve_account,
            asset_a,
            caller,
            self.reserve_account,
            amount_a,
        )?;
        if let Err(err) = self.assets.transfer_from(
            self.reserve_account,
            asset_b,
            caller,
            self.reserve_account,
            amount_b,
        ) {
            self.assets
                .transfer(asset_a, self.reserve_account, caller, amount_a)?;
            return Err(err);
        }
        Ok(())
    }

    /// Pushes both legs of a withdrawal to `recipient`, reclaiming the
    /// first leg if the second fails.
    fn push_pair(
        &mut self,
        recipient: AccountId,
        asset_a: AssetId,
        amount_a: Amount,
        asset_b: AssetId,
        amount_b: Amount,
    ) -> Result<()> {
        self.assets
            .transfer(asset_a, self.reserve_account, recipient, amount_a)?;
        if let Err(err) = self
            .assets
            .transfer(asset_b, self.reserve_account, recipient, amount_b)
        {
            self.assets
                .transfer(asset_a, recipient, self.reserve_account, amount_a)?;
            return Err(err);
        }
        Ok(())
    }
}
