use anchor_lang::prelude::*;

use crate::errors::StakingError;

/// A staking pool pairing one stake asset with one reward asset.
///
/// Rewards accrue through a lazily-updated reward-per-share accumulator:
/// any instruction that touches the pool first rolls the accumulator
/// forward to the current timestamp, then applies its own balance change.
/// Share changes therefore never retroactively alter rewards accrued
/// under the previous distribution.
#[account]
pub struct Pool {
    pub authority: Pubkey,
    pub stake_mint: Pubkey,
    pub reward_mint: Pubkey,
    pub stake_vault: Pubkey,
    pub reward_vault: Pubkey,
    pub reward_rate_per_second: u64,
    /// Reward per staked unit, scaled by `weather_math::REWARD_SCALE`.
    pub reward_per_share: u128,
    pub last_update_time: i64,
    pub total_staked: u64,
    pub lock_period: i64,
    pub min_stake: u64,
    /// Inactive pools reject new stakes; withdrawals and claims stay open.
    pub active: bool,
    pub created_at: i64,
    pub bump: u8,
    pub stake_vault_bump: u8,
    pub reward_vault_bump: u8,
}

impl Pool {
    pub const LEN: usize = 8 + // discriminator
        32 + // authority
        32 + // stake_mint
        32 + // reward_mint
        32 + // stake_vault
        32 + // reward_vault
        8 +  // reward_rate_per_second
        16 + // reward_per_share
        8 +  // last_update_time
        8 +  // total_staked
        8 +  // lock_period
        8 +  // min_stake
        1 +  // active
        8 +  // created_at
        1 +  // bump
        1 +  // stake_vault_bump
        1; // reward_vault_bump

    /// Rolls the reward-per-share accumulator forward to `now`.
    ///
    /// Must run before any mutation of `total_staked` or a position
    /// balance, and before a rate change so the new rate only applies
    /// prospectively.
    pub fn accrue(&mut self, now: i64) -> Result<()> {
        self.reward_per_share = weather_math::accrue_reward_per_share(
            self.reward_per_share,
            self.last_update_time,
            now,
            self.reward_rate_per_second,
            self.total_staked,
        )
        .ok_or(StakingError::MathOverflow)?;
        if now > self.last_update_time {
            self.last_update_time = now;
        }
        Ok(())
    }

    pub fn set_rate(&mut self, new_rate: u64, now: i64) -> Result<()> {
        require!(new_rate > 0, StakingError::InvalidRate);
        self.accrue(now)?;
        self.reward_rate_per_second = new_rate;
        Ok(())
    }
}
