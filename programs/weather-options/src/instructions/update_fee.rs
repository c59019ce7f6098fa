use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::OptionsError;
use crate::events::*;
use crate::state::*;

#[derive(Accounts)]
pub struct UpdateFee<'info> {
    #[account(
        constraint = authority.key() == config.authority @ OptionsError::Unauthorized,
    )]
    pub authority: Signer<'info>,

    #[account(mut, seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, Config>,
}

pub fn update_fee(ctx: Context<UpdateFee>, new_fee_bps: u16) -> Result<()> {
    require!(
        new_fee_bps <= weather_math::BPS_DENOMINATOR,
        OptionsError::InvalidFee
    );

    let now = Clock::get()?.unix_timestamp;
    let config = &mut ctx.accounts.config;
    let old_fee_bps = config.fee_bps;
    config.fee_bps = new_fee_bps;

    emit!(FeeUpdated {
        old_fee_bps,
        new_fee_bps,
        timestamp: now,
    });

    Ok(())
}
