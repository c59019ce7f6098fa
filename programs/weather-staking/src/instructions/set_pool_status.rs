use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::StakingError;
use crate::events::*;
use crate::state::*;

#[derive(Accounts)]
pub struct SetPoolStatus<'info> {
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

pub fn set_pool_status(ctx: Context<SetPoolStatus>, active: bool) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let pool = &mut ctx.accounts.pool;

    // Settle the accumulator at the moment of the status flip so a later
    // reactivation does not replay the paused interval against stale state.
    pool.accrue(now)?;
    pool.active = active;

    emit!(PoolStatusChanged {
        pool: pool.key(),
        active,
        timestamp: now,
    });

    Ok(())
}
