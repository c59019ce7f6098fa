use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::*;
use crate::errors::OptionsError;
use crate::events::*;
use crate::state::*;

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    pub settlement_mint: Account<'info, Mint>,

    #[account(
        init,
        payer = authority,
        space = Config::LEN,
        seeds = [CONFIG_SEED],
        bump
    )]
    pub config: Account<'info, Config>,

    /// Collects protocol fees skimmed off premiums.
    #[account(
        init,
        payer = authority,
        seeds = [FEE_VAULT_SEED],
        bump,
        token::mint = settlement_mint,
        token::authority = config,
    )]
    pub fee_vault: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn initialize(
    ctx: Context<Initialize>,
    oracle_authority: Pubkey,
    fee_bps: u16,
    min_premium: u64,
) -> Result<()> {
    require!(
        fee_bps <= weather_math::BPS_DENOMINATOR,
        OptionsError::InvalidFee
    );

    let now = Clock::get()?.unix_timestamp;
    let config = &mut ctx.accounts.config;
    config.authority = ctx.accounts.authority.key();
    config.oracle_authority = oracle_authority;
    config.settlement_mint = ctx.accounts.settlement_mint.key();
    config.fee_vault = ctx.accounts.fee_vault.key();
    config.fee_bps = fee_bps;
    config.min_premium = min_premium;
    config.bump = ctx.bumps.config;
    config.fee_vault_bump = ctx.bumps.fee_vault;

    emit!(ConfigInitialized {
        authority: config.authority,
        oracle_authority,
        settlement_mint: config.settlement_mint,
        fee_bps,
        min_premium,
        timestamp: now,
    });

    Ok(())
}
