use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::OptionsError;
use crate::events::*;
use crate::state::*;

#[derive(Accounts)]
pub struct SetOracleAuthority<'info> {
    #[account(
        constraint = authority.key() == config.authority @ OptionsError::Unauthorized,
    )]
    pub authority: Signer<'info>,

    #[account(mut, seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, Config>,
}

pub fn set_oracle_authority(
    ctx: Context<SetOracleAuthority>,
    new_oracle_authority: Pubkey,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let config = &mut ctx.accounts.config;
    let old_authority = config.oracle_authority;
    config.oracle_authority = new_oracle_authority;

    emit!(OracleAuthorityUpdated {
        old_authority,
        new_authority: new_oracle_authority,
        timestamp: now,
    });

    Ok(())
}
