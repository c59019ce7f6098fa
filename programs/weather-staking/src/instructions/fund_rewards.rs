use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::errors::StakingError;
use crate::events::*;
use crate::state::*;

#[derive(Accounts)]
pub struct FundRewards<'info> {
    pub funder: Signer<'info>,

    #[account(
        seeds = [POOL_SEED, pool.stake_mint.as_ref(), pool.reward_mint.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,

    #[account(
        mut,
        constraint = funder_reward_account.owner == funder.key() @ StakingError::Unauthorized,
        constraint = funder_reward_account.mint == pool.reward_mint @ StakingError::InvalidAsset,
    )]
    pub funder_reward_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        seeds = [REWARD_VAULT_SEED, pool.key().as_ref()],
        bump = pool.reward_vault_bump,
    )]
    pub reward_vault: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

/// Tops up the reward vault. Reward liquidity is the operator's problem,
/// not the accounting's; anyone may fund.
pub fn fund_rewards(ctx: Context<FundRewards>, amount: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.funder_reward_account.to_account_info(),
                to: ctx.accounts.reward_vault.to_account_info(),
                authority: ctx.accounts.funder.to_account_info(),
            },
        ),
        amount,
    )?;

    emit!(RewardsFunded {
        pool: ctx.accounts.pool.key(),
        funder: ctx.accounts.funder.key(),
        amount,
        timestamp: now,
    });

    Ok(())
}
