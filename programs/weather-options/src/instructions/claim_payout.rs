use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::errors::OptionsError;
use crate::events::*;
use crate::state::*;

#[derive(Accounts)]
pub struct ClaimPayout<'info> {
    pub holder: Signer<'info>,

    #[account(seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, Config>,

    pub series: Account<'info, OptionSeries>,

    #[account(
        mut,
        seeds = [POSITION_SEED, series.key().as_ref(), holder.key().as_ref()],
        bump = position.bump,
        constraint = position.owner == holder.key() @ OptionsError::Unauthorized,
    )]
    pub position: Account<'info, OptionPosition>,

    #[account(
        mut,
        constraint = holder_token_account.owner == holder.key() @ OptionsError::Unauthorized,
        constraint = holder_token_account.mint == config.settlement_mint @ OptionsError::Unauthorized,
    )]
    pub holder_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        seeds = [COLLATERAL_VAULT_SEED, series.key().as_ref()],
        bump = series.collateral_vault_bump,
    )]
    pub collateral_vault: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

pub fn claim_payout(ctx: Context<ClaimPayout>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let series = &ctx.accounts.series;
    let position = &mut ctx.accounts.position;

    let quantity = position.quantity;
    let payout = position.claim(series)?;

    // Replayed claims on an already-zeroed position change nothing and
    // stay silent; a first claim always lands in the event log, even
    // when the position expired worthless.
    if quantity == 0 {
        return Ok(());
    }

    if payout > 0 {
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
                    to: ctx.accounts.holder_token_account.to_account_info(),
                    authority: series.to_account_info(),
                },
                signer,
            ),
            payout,
        )?;
    }

    emit!(PayoutClaimed {
        series: series.key(),
        holder: ctx.accounts.holder.key(),
        quantity,
        payout,
        timestamp: now,
    });

    Ok(())
}
