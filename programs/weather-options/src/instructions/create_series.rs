use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::errors::OptionsError;
use crate::events::*;
use crate::state::*;

#[derive(Accounts)]
#[instruction(
    station: String,
    strike: u64,
    premium: u64,
    expiry: i64,
    total_supply: u64,
    is_call: bool,
    index_cap: u64
)]
pub struct CreateSeries<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,

    #[account(seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, Config>,

    #[account(
        init,
        payer = creator,
        space = OptionSeries::LEN,
        seeds = [
            SERIES_SEED,
            creator.key().as_ref(),
            station.as_bytes(),
            &strike.to_le_bytes()[..],
            &expiry.to_le_bytes()[..],
            &[is_call as u8],
        ],
        bump
    )]
    pub series: Account<'info, OptionSeries>,

    /// Holds the creator's collateral until claims and reclaim drain it.
    #[account(
        init,
        payer = creator,
        seeds = [COLLATERAL_VAULT_SEED, series.key().as_ref()],
        bump,
        token::mint = settlement_mint,
        token::authority = series,
    )]
    pub collateral_vault: Account<'info, TokenAccount>,

    #[account(
        constraint = settlement_mint.key() == config.settlement_mint @ OptionsError::Unauthorized,
    )]
    pub settlement_mint: Account<'info, Mint>,

    #[account(
        mut,
        constraint = creator_token_account.owner == creator.key() @ OptionsError::Unauthorized,
        constraint = creator_token_account.mint == config.settlement_mint @ OptionsError::Unauthorized,
    )]
    pub creator_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn create_series(
    ctx: Context<CreateSeries>,
    station: String,
    strike: u64,
    premium: u64,
    expiry: i64,
    total_supply: u64,
    is_call: bool,
    index_cap: u64,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    let required = OptionSeries::validate_terms(
        &station,
        strike,
        premium,
        expiry,
        total_supply,
        is_call,
        index_cap,
        ctx.accounts.config.min_premium,
        now,
    )?;
    require!(
        ctx.accounts.creator_token_account.amount >= required,
        OptionsError::InsufficientCollateral
    );

    let series = &mut ctx.accounts.series;
    series.creator = ctx.accounts.creator.key();
    series.station = station.clone();
    series.strike = strike;
    series.premium = premium;
    series.expiry = expiry;
    series.is_call = is_call;
    series.index_cap = index_cap;
    series.total_supply = total_supply;
    series.purchased = 0;
    series.settled = false;
    series.settlement_value = 0;
    series.collateral = required;
    series.reclaimed = false;
    series.created_at = now;
    series.collateral_vault = ctx.accounts.collateral_vault.key();
    series.bump = ctx.bumps.series;
    series.collateral_vault_bump = ctx.bumps.collateral_vault;

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.creator_token_account.to_account_info(),
                to: ctx.accounts.collateral_vault.to_account_info(),
                authority: ctx.accounts.creator.to_account_info(),
            },
        ),
        required,
    )?;

    msg!("Series created for station {} with collateral {}", station, required);

    emit!(SeriesCreated {
        series: series.key(),
        creator: series.creator,
        station,
        strike,
        premium,
        expiry,
        is_call,
        index_cap,
        total_supply,
        collateral: required,
        timestamp: now,
    });

    Ok(())
}
