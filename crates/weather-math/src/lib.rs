//! Fixed-point money math shared by the staking and options programs.
//!
//! All money amounts are `u64` in the smallest token denomination.
//! Intermediate products widen to `u128`; every fallible step returns
//! `None` so the caller can map it onto its own error code. No floats
//! anywhere in the accounting paths.

/// Scale factor for the reward-per-share accumulator.
pub const REWARD_SCALE: u128 = 1_000_000_000_000;

/// Basis-point denominator for fee math.
pub const BPS_DENOMINATOR: u16 = 10_000;

/// Advances a reward-per-share accumulator from `last_update` to `now`.
///
/// Returns the accumulator unchanged when the pool is empty or when time
/// has not moved forward; rewards that accrue while nobody is staked are
/// simply never minted.
pub fn accrue_reward_per_share(
    acc: u128,
    last_update: i64,
    now: i64,
    rate_per_second: u64,
    total_staked: u64,
) -> Option<u128> {
    if total_staked == 0 || now <= last_update {
        return Some(acc);
    }
    let elapsed = (now - last_update) as u128;
    let accrued = elapsed
        .checked_mul(rate_per_second as u128)?
        .checked_mul(REWARD_SCALE)?
        / (total_staked as u128);
    acc.checked_add(accrued)
}

/// Reward owed on `balance` since the holder's last checkpoint.
pub fn earned(balance: u64, acc: u128, checkpoint: u128) -> Option<u64> {
    let delta = acc.checked_sub(checkpoint)?;
    let owed = (balance as u128).checked_mul(delta)? / REWARD_SCALE;
    u64::try_from(owed).ok()
}

/// Volume-weighted average cost basis after adding `added_qty` units
/// bought for `added_cost` in total.
pub fn weighted_entry_premium(
    old_entry: u64,
    old_qty: u64,
    added_cost: u64,
    added_qty: u64,
) -> Option<u64> {
    let total_qty = old_qty.checked_add(added_qty)?;
    if total_qty == 0 {
        return Some(0);
    }
    let total_cost = (old_entry as u128)
        .checked_mul(old_qty as u128)?
        .checked_add(added_cost as u128)?;
    u64::try_from(total_cost / total_qty as u128).ok()
}

/// Settlement payout per unit held.
///
/// Calls are clamped at `index_cap` so the payout (and therefore the
/// collateral requirement) is bounded; puts are naturally bounded by the
/// strike.
pub fn payout_per_unit(is_call: bool, strike: u64, index_value: u64, index_cap: u64) -> u64 {
    if is_call {
        index_value.min(index_cap).saturating_sub(strike)
    } else {
        strike.saturating_sub(index_value)
    }
}

/// Collateral a series creator must post to cover the worst-case payout
/// across all units: `strike * supply` for a put, `(cap - strike) * supply`
/// for a call. Returns `None` if the cap does not exceed the strike or on
/// overflow.
pub fn required_collateral(
    is_call: bool,
    strike: u64,
    index_cap: u64,
    total_supply: u64,
) -> Option<u64> {
    let per_unit = if is_call {
        if index_cap <= strike {
            return None;
        }
        index_cap - strike
    } else {
        strike
    };
    let total = (per_unit as u128).checked_mul(total_supply as u128)?;
    u64::try_from(total).ok()
}

/// Splits `amount` into `(fee, net)` by basis points; `fee + net == amount`.
pub fn split_fee(amount: u64, fee_bps: u16) -> Option<(u64, u64)> {
    if fee_bps > BPS_DENOMINATOR {
        return None;
    }
    let fee = (amount as u128) * (fee_bps as u128) / (BPS_DENOMINATOR as u128);
    let fee = fee as u64;
    Some((fee, amount - fee))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulator_is_unchanged_while_pool_is_empty() {
        let acc = accrue_reward_per_share(42, 0, 1_000, 10, 0).unwrap();
        assert_eq!(acc, 42);
    }

    #[test]
    fn accumulator_ignores_non_advancing_clock() {
        let acc = accrue_reward_per_share(42, 1_000, 1_000, 10, 100).unwrap();
        assert_eq!(acc, 42);
        let acc = accrue_reward_per_share(42, 1_000, 999, 10, 100).unwrap();
        assert_eq!(acc, 42);
    }

    #[test]
    fn sole_staker_earns_the_full_emission() {
        // rate 10/sec, 100 staked at t=0, claim at t=100 -> exactly 1000.
        let acc = accrue_reward_per_share(0, 0, 100, 10, 100).unwrap();
        assert_eq!(earned(100, acc, 0).unwrap(), 1_000);
    }

    #[test]
    fn staggered_stakers_split_rewards_fairly() {
        // A stakes 100 at t=0, B stakes 100 at t=50, both observed at t=100.
        // A alone earns [0,50): 500. Both split [50,100): 250 each.
        let rate = 10;
        let acc_t50 = accrue_reward_per_share(0, 0, 50, rate, 100).unwrap();
        let acc_t100 = accrue_reward_per_share(acc_t50, 50, 100, rate, 200).unwrap();

        let a = earned(100, acc_t100, 0).unwrap();
        let b = earned(100, acc_t100, acc_t50).unwrap();
        assert_eq!(a, 750);
        assert_eq!(b, 250);
        assert_eq!(a - b, 500);
    }

    #[test]
    fn earned_fails_on_rewound_checkpoint() {
        assert_eq!(earned(100, 5, 6), None);
    }

    #[test]
    fn entry_premium_is_volume_weighted() {
        // 10 units at 2, then 30 units at 4 -> (20 + 120) / 40 = 3.
        let entry = weighted_entry_premium(0, 0, 20, 10).unwrap();
        assert_eq!(entry, 2);
        let entry = weighted_entry_premium(entry, 10, 120, 30).unwrap();
        assert_eq!(entry, 3);
    }

    #[test]
    fn call_payout_is_clamped_at_the_cap() {
        assert_eq!(payout_per_unit(true, 15, 20, 30), 5);
        assert_eq!(payout_per_unit(true, 15, 10, 30), 0);
        assert_eq!(payout_per_unit(true, 15, 1_000_000, 30), 15);
    }

    #[test]
    fn put_payout_is_bounded_by_the_strike() {
        assert_eq!(payout_per_unit(false, 15, 10, 0), 5);
        assert_eq!(payout_per_unit(false, 15, 20, 0), 0);
        assert_eq!(payout_per_unit(false, 15, 0, 0), 15);
    }

    #[test]
    fn put_collateral_covers_every_index_value() {
        let collateral = required_collateral(false, 15, 0, 100).unwrap();
        assert_eq!(collateral, 1_500);
        for index in 0..100 {
            let aggregate = payout_per_unit(false, 15, index, 0) * 100;
            assert!(aggregate <= collateral);
        }
    }

    #[test]
    fn call_collateral_covers_every_index_value_up_to_the_cap() {
        let collateral = required_collateral(true, 15, 30, 100).unwrap();
        assert_eq!(collateral, 1_500);
        for index in 0..1_000 {
            let aggregate = payout_per_unit(true, 15, index, 30) * 100;
            assert!(aggregate <= collateral);
        }
    }

    #[test]
    fn call_collateral_rejects_cap_at_or_below_strike() {
        assert_eq!(required_collateral(true, 15, 15, 100), None);
        assert_eq!(required_collateral(true, 15, 10, 100), None);
    }

    #[test]
    fn fee_split_conserves_the_amount() {
        let (fee, net) = split_fee(1_000, 250).unwrap();
        assert_eq!(fee, 25);
        assert_eq!(net, 975);
        assert_eq!(fee + net, 1_000);

        let (fee, net) = split_fee(3, 250).unwrap();
        assert_eq!(fee, 0);
        assert_eq!(net, 3);
    }

    #[test]
    fn fee_split_rejects_rates_above_one_hundred_percent() {
        assert_eq!(split_fee(1_000, 10_001), None);
    }
}
