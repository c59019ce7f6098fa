use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::*;
use crate::errors::StakingError;
use crate::events::*;
use crate::state::*;

#[derive(Accounts)]
pub struct CreatePool<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    pub stake_mint: Account<'info, Mint>,

    pub reward_mint: Account<'info, Mint>,

    #[account(
        init,
        payer = authority,
        space = Pool::LEN,
        seeds = [POOL_SEED, stake_mint.key().as_ref(), reward_mint.key().as_ref()],
        bump
    )]
    pub pool: Account<'info, Pool>,

    /// Holds staked principal; owned by the pool PDA.
    #[account(
        init,
        payer = authority,
        seeds = [STAKE_VAULT_SEED, pool.key().as_ref()],
        bump,
        token::mint = stake_mint,
        token::authority = pool,
    )]
    pub stake_vault: Account<'info, TokenAccount>,

    /// Holds reward liquidity; topped up via `fund_rewards`.
    #[account(
        init,
        payer = authority,
        seeds = [REWARD_VAULT_SEED, pool.key().as_ref()],
        bump,
        token::mint = reward_mint,
        token::authority = pool,
    )]
    pub reward_vault: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn create_pool(
    ctx: Context<CreatePool>,
    reward_rate_per_second: u64,
    lock_period: i64,
    min_stake: u64,
) -> Result<()> {
    require!(reward_rate_per_second > 0, StakingError::InvalidRate);
    require!(lock_period >= 0, StakingError::InvalidLockPeriod);
    require!(
        ctx.accounts.stake_mint.key() != ctx.accounts.reward_mint.key(),
        StakingError::InvalidAsset
    );

    let now = Clock::get()?.unix_timestamp;
    let pool = &mut ctx.accounts.pool;
    pool.authority = ctx.accounts.authority.key();
    pool.stake_mint = ctx.accounts.stake_mint.key();
    pool.reward_mint = ctx.accounts.reward_mint.key();
    pool.stake_vault = ctx.accounts.stake_vault.key();
    pool.reward_vault = ctx.accounts.reward_vault.key();
    pool.reward_rate_per_second = reward_rate_per_second;
    pool.reward_per_share = 0;
    pool.last_update_time = now;
    pool.total_staked = 0;
    pool.lock_period = lock_period;
    pool.min_stake = min_stake;
    pool.active = true;
    pool.created_at = now;
    pool.bump = ctx.bumps.pool;
    pool.stake_vault_bump = ctx.bumps.stake_vault;
    pool.reward_vault_bump = ctx.bumps.reward_vault;

    emit!(PoolCreated {
        pool: pool.key(),
        authority: pool.authority,
        stake_mint: pool.stake_mint,
        reward_mint: pool.reward_mint,
        reward_rate_per_second,
        lock_period,
        min_stake,
        timestamp: now,
    });

    Ok(())
}
