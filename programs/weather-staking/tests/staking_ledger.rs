//! Drives the pool/position state machine directly with synthetic
//! timestamps; no validator involved.

use anchor_lang::prelude::*;
use weather_staking::state::{Pool, StakePosition};

fn new_pool(rate: u64, lock_period: i64, min_stake: u64) -> Pool {
    Pool {
        authority: Pubkey::new_unique(),
        stake_mint: Pubkey::new_unique(),
        reward_mint: Pubkey::new_unique(),
        stake_vault: Pubkey::new_unique(),
        reward_vault: Pubkey::new_unique(),
        reward_rate_per_second: rate,
        reward_per_share: 0,
        last_update_time: 0,
        total_staked: 0,
        lock_period,
        min_stake,
        active: true,
        created_at: 0,
        bump: 255,
        stake_vault_bump: 255,
        reward_vault_bump: 255,
    }
}

fn new_position(pool: &Pool) -> StakePosition {
    StakePosition {
        owner: Pubkey::new_unique(),
        pool: Pubkey::new_unique(),
        balance: 0,
        reward_per_share_checkpoint: pool.reward_per_share,
        pending_rewards: 0,
        stake_time: 0,
        lock_end_time: 0,
        lifetime_rewards: 0,
        bump: 255,
    }
}

fn assert_err<T: core::fmt::Debug>(res: Result<T>, name: &str) {
    let err = res.expect_err("expected an error");
    let debug = format!("{:?}", err);
    assert!(debug.contains(name), "expected {name}, got {debug}");
}

#[test]
fn sole_staker_claims_the_exact_emission() {
    let mut pool = new_pool(10, 0, 1);
    let mut alice = new_position(&pool);

    alice.stake(&mut pool, 100, 0).unwrap();
    let claimed = alice.claim(&mut pool, 100).unwrap();

    assert_eq!(claimed, 1_000);
    assert_eq!(alice.pending_rewards, 0);
    assert_eq!(alice.lifetime_rewards, 1_000);

    // Nothing more accrues at the same instant; a second claim is a no-op.
    let claimed = alice.claim(&mut pool, 100).unwrap();
    assert_eq!(claimed, 0);
}

#[test]
fn total_staked_reconciles_after_every_operation() {
    let mut pool = new_pool(7, 0, 1);
    let mut alice = new_position(&pool);
    let mut bob = new_position(&pool);

    let check = |pool: &Pool, a: &StakePosition, b: &StakePosition| {
        assert_eq!(a.balance + b.balance, pool.total_staked);
    };

    alice.stake(&mut pool, 500, 10).unwrap();
    check(&pool, &alice, &bob);
    bob.stake(&mut pool, 250, 20).unwrap();
    check(&pool, &alice, &bob);
    alice.withdraw(&mut pool, 200, 30).unwrap();
    check(&pool, &alice, &bob);
    alice.claim(&mut pool, 40).unwrap();
    check(&pool, &alice, &bob);
    bob.withdraw(&mut pool, 250, 50).unwrap();
    check(&pool, &alice, &bob);
    alice.withdraw(&mut pool, 300, 60).unwrap();
    check(&pool, &alice, &bob);
    assert_eq!(pool.total_staked, 0);
}

#[test]
fn staggered_stakers_are_paid_proportionally_to_time() {
    // A and B stake the same amount, B starts 40 seconds later. A's extra
    // reward must be exactly the solo emission over those 40 seconds.
    let rate = 10;
    let mut pool = new_pool(rate, 0, 1);
    let mut a = new_position(&pool);
    let mut b = new_position(&pool);

    a.stake(&mut pool, 100, 0).unwrap();
    b.stake(&mut pool, 100, 40).unwrap();

    let a_claim = a.claim(&mut pool, 100).unwrap();
    let b_claim = b.claim(&mut pool, 100).unwrap();

    let solo_interval = rate * 40;
    assert!(a_claim - b_claim >= solo_interval - 1);
    assert!(a_claim - b_claim <= solo_interval + 1);
}

#[test]
fn rewards_accrued_before_a_new_staker_are_not_diluted() {
    let mut pool = new_pool(10, 0, 1);
    let mut a = new_position(&pool);
    let mut whale = new_position(&pool);

    a.stake(&mut pool, 100, 0).unwrap();
    // Whale joins at t=100 with 100x the stake; A's first 1000 units are
    // already checkpointed and must survive untouched.
    whale.stake(&mut pool, 10_000, 100).unwrap();
    let a_claim = a.claim(&mut pool, 100).unwrap();
    assert_eq!(a_claim, 1_000);
}

#[test]
fn withdraw_respects_the_lock_window() {
    let mut pool = new_pool(10, 1_000, 1);
    let mut alice = new_position(&pool);

    alice.stake(&mut pool, 100, 0).unwrap();
    assert_eq!(alice.lock_end_time, 1_000);

    assert_err(alice.withdraw(&mut pool, 50, 999), "StillLocked");
    // Boundary: the lock ends exactly at lock_end_time.
    alice.withdraw(&mut pool, 50, 1_000).unwrap();
    assert_eq!(alice.balance, 50);
}

#[test]
fn restaking_refreshes_the_lock() {
    let mut pool = new_pool(10, 100, 1);
    let mut alice = new_position(&pool);

    alice.stake(&mut pool, 100, 0).unwrap();
    alice.stake(&mut pool, 100, 90).unwrap();
    assert_eq!(alice.lock_end_time, 190);
    assert_err(alice.withdraw(&mut pool, 10, 100), "StillLocked");
}

#[test]
fn withdraw_rejects_amounts_above_the_balance() {
    let mut pool = new_pool(10, 0, 1);
    let mut alice = new_position(&pool);

    alice.stake(&mut pool, 100, 0).unwrap();
    assert_err(alice.withdraw(&mut pool, 101, 10), "InsufficientBalance");
    // The failed attempt must not have touched the balances.
    assert_eq!(alice.balance, 100);
    assert_eq!(pool.total_staked, 100);
}

#[test]
fn inactive_pools_reject_new_stakes_but_allow_exits() {
    let mut pool = new_pool(10, 0, 1);
    let mut alice = new_position(&pool);

    alice.stake(&mut pool, 100, 0).unwrap();
    pool.active = false;

    assert_err(alice.stake(&mut pool, 100, 10), "PoolInactive");
    alice.withdraw(&mut pool, 40, 10).unwrap();
    let claimed = alice.claim(&mut pool, 10).unwrap();
    assert!(claimed > 0);
}

#[test]
fn stakes_below_the_minimum_are_rejected() {
    let mut pool = new_pool(10, 0, 50);
    let mut alice = new_position(&pool);
    assert_err(alice.stake(&mut pool, 49, 0), "BelowMinimum");
    alice.stake(&mut pool, 50, 0).unwrap();
}

#[test]
fn emergency_exit_forfeits_rewards_and_ignores_the_lock() {
    let mut pool = new_pool(10, 1_000_000, 1);
    let mut alice = new_position(&pool);

    alice.stake(&mut pool, 100, 0).unwrap();
    // Only available once the pool is paused.
    assert_err(alice.emergency_exit(&mut pool, 10), "PoolStillActive");

    pool.active = false;
    let (amount, forfeited) = alice.emergency_exit(&mut pool, 10).unwrap();
    assert_eq!(amount, 100);
    assert_eq!(forfeited, 100); // 10 seconds at rate 10
    assert_eq!(alice.balance, 0);
    assert_eq!(alice.pending_rewards, 0);
    assert_eq!(pool.total_staked, 0);
}

#[test]
fn rate_changes_apply_prospectively_only() {
    let mut pool = new_pool(10, 0, 1);
    let mut alice = new_position(&pool);

    alice.stake(&mut pool, 100, 0).unwrap();
    // 100s at rate 10, then 100s at rate 20.
    pool.set_rate(20, 100).unwrap();
    let claimed = alice.claim(&mut pool, 200).unwrap();
    assert_eq!(claimed, 1_000 + 2_000);
}

#[test]
fn zero_rate_is_rejected() {
    let mut pool = new_pool(10, 0, 1);
    assert_err(pool.set_rate(0, 10), "InvalidRate");
}

#[test]
fn empty_pool_interval_mints_no_rewards() {
    let mut pool = new_pool(10, 0, 1);
    let mut alice = new_position(&pool);

    // Pool sits empty until t=1000; nobody is owed the skipped emission.
    pool.accrue(1_000).unwrap();
    assert_eq!(pool.reward_per_share, 0);

    alice.stake(&mut pool, 100, 1_000).unwrap();
    let claimed = alice.claim(&mut pool, 1_100).unwrap();
    assert_eq!(claimed, 1_000);
}
