use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::StakingError;
use crate::events::*;
use crate::state::*;

#[derive(Accounts)]
pub struct SetRewardRate<'info> {
    #[account(
        constraint = authority.key() == pool.authority @ StakingError::Unauthorized,
    )]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [POOL_SEED, pool.stake_mint.as_ref(), pool.reward_mint.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,
}

pub fn set_reward_rate(ctx: Context<SetRewardRate>, new_rate: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let pool = &mut ctx.accounts.pool;

    let old_rate = pool.reward_rate_per_second;
    // Accrues at the old rate first so the change is prospective only.
    pool.set_rate(new_rate, now)?;

    emit!(RewardRateUpdated {
        pool: pool.key(),
        old_rate,
        new_rate,
        timestamp: now,
    });

    Ok(())
}
