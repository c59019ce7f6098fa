use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::errors::OptionsError;
use crate::events::*;
use crate::state::*;

#[derive(Accounts)]
pub struct Purchase<'info> {
    #[account(mut)]
    pub buyer: Signer<'info>,

    #[account(seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, Config>,

    #[account(mut)]
    pub series: Account<'info, OptionSeries>,

    #[account(
        init_if_needed,
        payer = buyer,
        space = OptionPosition::LEN,
        seeds = [POSITION_SEED, series.key().as_ref(), buyer.key().as_ref()],
        bump,
    )]
    pub position: Account<'info, OptionPosition>,

    #[account(
        mut,
        constraint = buyer_token_account.owner == buyer.key() @ OptionsError::Unauthorized,
        constraint = buyer_token_account.mint == config.settlement_mint @ OptionsError::Unauthorized,
    )]
    pub buyer_token_account: Account<'info, TokenAccount>,

    /// Net premium goes straight to the series creator.
    #[account(
        mut,
        constraint = creator_token_account.owner == series.creator @ OptionsError::Unauthorized,
        constraint = creator_token_account.mint == config.settlement_mint @ OptionsError::Unauthorized,
    )]
    pub creator_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = fee_vault.key() == config.fee_vault @ OptionsError::Unauthorized,
    )]
    pub fee_vault: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn purchase(ctx: Context<Purchase>, quantity: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let series = &mut ctx.accounts.series;
    let position = &mut ctx.accounts.position;

    if position.owner == Pubkey::default() {
        position.owner = ctx.accounts.buyer.key();
        position.series = series.key();
        position.bump = ctx.bumps.position;
    }

    let cost = series.purchase(quantity, now)?;
    require!(
        ctx.accounts.buyer_token_account.amount >= cost,
        OptionsError::InsufficientPayment
    );
    position.apply_purchase(quantity, cost)?;

    let (fee, net) = weather_math::split_fee(cost, ctx.accounts.config.fee_bps)
        .ok_or(OptionsError::InvalidFee)?;

    if fee > 0 {
        token::transfer(
            CpiContext::new(
                ctx.accounts.token_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.buyer_token_account.to_account_info(),
                    to: ctx.accounts.fee_vault.to_account_info(),
                    authority: ctx.accounts.buyer.to_account_info(),
                },
            ),
            fee,
        )?;
    }

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.buyer_token_account.to_account_info(),
                to: ctx.accounts.creator_token_account.to_account_info(),
                authority: ctx.accounts.buyer.to_account_info(),
            },
        ),
        net,
    )?;

    emit!(OptionsPurchased {
        series: series.key(),
        buyer: ctx.accounts.buyer.key(),
        quantity,
        cost,
        fee,
        entry_premium: position.entry_premium,
        purchased: series.purchased,
        timestamp: now,
    });

    Ok(())
}
