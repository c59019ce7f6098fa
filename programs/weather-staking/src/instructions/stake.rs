use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::errors::StakingError;
use crate::events::*;
use crate::state::*;

#[derive(Accounts)]
pub struct Stake<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        mut,
        seeds = [POOL_SEED, pool.stake_mint.as_ref(), pool.reward_mint.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,

    #[account(
        init_if_needed,
        payer = user,
        space = StakePosition::LEN,
        seeds = [STAKE_POSITION_SEED, pool.key().as_ref(), user.key().as_ref()],
        bump,
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
    pub system_program: Program<'info, System>,
}

pub fn stake(ctx: Context<Stake>, amount: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let pool = &mut ctx.accounts.pool;
    let position = &mut ctx.accounts.position;

    if position.owner == Pubkey::default() {
        position.owner = ctx.accounts.user.key();
        position.pool = pool.key();
        position.bump = ctx.bumps.position;
    }

    position.stake(pool, amount, now)?;

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.user_stake_account.to_account_info(),
                to: ctx.accounts.stake_vault.to_account_info(),
                authority: ctx.accounts.user.to_account_info(),
            },
        ),
        amount,
    )?;

    emit!(Staked {
        pool: pool.key(),
        user: ctx.accounts.user.key(),
        amount,
        balance: position.balance,
        total_staked: pool.total_staked,
        lock_end_time: position.lock_end_time,
        timestamp: now,
    });

    Ok(())
}
