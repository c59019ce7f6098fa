use anchor_lang::prelude::*;

use crate::errors::StakingError;
use crate::state::Pool;

/// One user's stake in one pool. Zeroed, never closed, on full exit.
#[account]
pub struct StakePosition {
    pub owner: Pubkey,
    pub pool: Pubkey,
    pub balance: u64,
    /// Pool accumulator value at this position's last interaction.
    pub reward_per_share_checkpoint: u128,
    /// Rewards earned but not yet paid out.
    pub pending_rewards: u64,
    pub stake_time: i64,
    pub lock_end_time: i64,
    pub lifetime_rewards: u64,
    pub bump: u8,
}

impl StakePosition {
    pub const LEN: usize = 8 + // discriminator
        32 + // owner
        32 + // pool
        8 +  // balance
        16 + // reward_per_share_checkpoint
        8 +  // pending_rewards
        8 +  // stake_time
        8 +  // lock_end_time
        8 +  // lifetime_rewards
        1; // bump

    /// Folds rewards accrued since the last checkpoint into
    /// `pending_rewards` and moves the checkpoint to the pool's current
    /// accumulator value. Must run before this position's balance changes.
    fn checkpoint(&mut self, reward_per_share: u128) -> Result<()> {
        let owed = weather_math::earned(
            self.balance,
            reward_per_share,
            self.reward_per_share_checkpoint,
        )
        .ok_or(StakingError::MathOverflow)?;
        self.pending_rewards = self
            .pending_rewards
            .checked_add(owed)
            .ok_or(StakingError::MathOverflow)?;
        self.reward_per_share_checkpoint = reward_per_share;
        Ok(())
    }

    pub fn stake(&mut self, pool: &mut Pool, amount: u64, now: i64) -> Result<()> {
        require!(pool.active, StakingError::PoolInactive);
        require!(amount >= pool.min_stake, StakingError::BelowMinimum);

        pool.accrue(now)?;
        self.checkpoint(pool.reward_per_share)?;

        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(StakingError::MathOverflow)?;
        pool.total_staked = pool
            .total_staked
            .checked_add(amount)
            .ok_or(StakingError::MathOverflow)?;

        self.stake_time = now;
        self.lock_end_time = now
            .checked_add(pool.lock_period)
            .ok_or(StakingError::MathOverflow)?;
        Ok(())
    }

    pub fn withdraw(&mut self, pool: &mut Pool, amount: u64, now: i64) -> Result<()> {
        pool.accrue(now)?;
        self.checkpoint(pool.reward_per_share)?;

        require!(now >= self.lock_end_time, StakingError::StillLocked);
        require!(amount <= self.balance, StakingError::InsufficientBalance);

        self.balance -= amount;
        pool.total_staked = pool
            .total_staked
            .checked_sub(amount)
            .ok_or(StakingError::InsufficientBalance)?;
        Ok(())
    }

    /// Returns the amount of reward tokens to pay out; zero is a valid
    /// no-op claim.
    pub fn claim(&mut self, pool: &mut Pool, now: i64) -> Result<u64> {
        pool.accrue(now)?;
        self.checkpoint(pool.reward_per_share)?;

        let amount = self.pending_rewards;
        self.pending_rewards = 0;
        self.lifetime_rewards = self
            .lifetime_rewards
            .checked_add(amount)
            .ok_or(StakingError::MathOverflow)?;
        Ok(amount)
    }

    /// Forfeits pending rewards and releases the full balance regardless
    /// of the lock. Returns `(balance, forfeited)`.
    pub fn emergency_exit(&mut self, pool: &mut Pool, now: i64) -> Result<(u64, u64)> {
        require!(!pool.active, StakingError::PoolStillActive);

        // Keep the accumulator consistent for the remaining stakers.
        pool.accrue(now)?;
        self.checkpoint(pool.reward_per_share)?;

        let balance = self.balance;
        let forfeited = self.pending_rewards;
        pool.total_staked = pool
            .total_staked
            .checked_sub(balance)
            .ok_or(StakingError::InsufficientBalance)?;

        self.balance = 0;
        self.pending_rewards = 0;
        self.lock_end_time = 0;
        Ok((balance, forfeited))
    }
}
