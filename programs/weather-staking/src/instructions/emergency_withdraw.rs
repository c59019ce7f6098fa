use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::errors::StakingError;
use crate::events::*;
use crate::state::*;

#[derive(Accounts)]
pub struct EmergencyWithdraw<'info> {
    pub user: Signer<'info>,

    #[account(
        mut,
        seeds = [POOL_SEED, pool.stake_mint.as_ref(), pool.reward_mint.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,

    #[account(
        mut,
        seeds = [STAKE_POSITION_SEED, pool.key().as_ref(), user.key().as_ref()],
        bump = position.bump,
        constraint = position.owner == user.key() @ StakingError::Unauthorized,
    )]
    pub position: Account<'info, StakePosition>,

    #[account(
        mut,
        constraint = user_stake_account.owner == user.key() @ StakingError::Unauthorized,
        constraint = user_stake_account.mint == pool.stake_mint @ StakingError::InvalidAsset,
    )]
    pub user_stake_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        seeds = [STAKE_VAULT_SEED, pool.key().as_ref()],
        bump = pool.stake_vault_bump,
    )]
    pub stake_vault: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

/// Trades reward fairness for withdrawal liveness: only available while
/// the pool is paused, ignores the lock, and forfeits pending rewards.
pub fn emergency_withdraw(ctx: Context<EmergencyWithdraw>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let pool = &mut ctx.accounts.pool;
    let position = &mut ctx.accounts.position;

    let (amount, forfeited) = position.emergency_exit(pool, now)?;

    if amount > 0 {
        let stake_mint = pool.stake_mint;
        let reward_mint = pool.reward_mint;
        let seeds = &[
            POOL_SEED,
            stake_mint.as_ref(),
            reward_mint.as_ref(),
            &[pool.bump],
        ];
        let signer = &[&seeds[..]];

        token::transfer(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.stake_vault.to_account_info(),
                    to: ctx.accounts.user_stake_account.to_account_info(),
                    authority: pool.to_account_info(),
                },
                signer,
            ),
            amount,
        )?;
    }

    emit!(EmergencyWithdrawn {
        pool: pool.key(),
        user: ctx.accounts.user.key(),
        amount,
        forfeited_rewards: forfeited,
        total_staked: pool.total_staked,
        timestamp: now,
    });

    Ok(())
}
