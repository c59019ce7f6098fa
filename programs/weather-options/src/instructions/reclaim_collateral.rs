use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::errors::OptionsError;
use crate::events::*;
use crate::state::*;

#[derive(Accounts)]
pub struct ReclaimCollateral<'info> {
    #[account(
        constraint = creator.key() == series.creator @ OptionsError::Unauthorized,
    )]
    pub creator: Signer<'info>,

    #[account(seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, Config>,

    #[account(mut)]
    pub series: Account<'info, OptionSeries>,

    #[account(
        mut,
        constraint = creator_token_account.owner == creator.key() @ OptionsError::Unauthorized,
        constraint = creator_token_account.mint == config.settlement_mint @ OptionsError::Unauthorized,
    )]
    pub creator_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        seeds = [COLLATERAL_VAULT_SEED, series.key().as_ref()],
        bump = series.collateral_vault_bump,
    )]
    pub collateral_vault: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

/// Returns the collateral not owed to holders after settlement. The
/// aggregate payout on purchased units stays in the vault until every
/// holder has claimed.
pub fn reclaim_collateral(ctx: Context<ReclaimCollateral>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let series = &mut ctx.accounts.series;

    let (excess, reserved) = series.reclaim()?;

    if excess > 0 {
        let creator = series.creator;
        let station = series.station.clone();
        let strike_bytes = series.strike.to_le_bytes();
        let expiry_bytes = series.expiry.to_le_bytes();
        let seeds = &[
            SERIES_SEED,
            creator.as_ref(),
            station.as_bytes(),
            &strike_bytes,
            &expiry_bytes,
            &[series.is_call as u8],
            &[series.bump],
        ];
        let signer = &[&seeds[..]];

        token::transfer(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.collateral_vault.to_account_info(),
                    to: ctx.accounts.creator_token_account.to_account_info(),
                    authority: series.to_account_info(),
                },
                signer,
            ),
            excess,
        )?;
    }

    emit!(CollateralReclaimed {
        series: series.key(),
        creator: ctx.accounts.creator.key(),
        amount: excess,
        reserved,
        timestamp: now,
    });

    Ok(())
}
