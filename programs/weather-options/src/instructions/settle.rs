use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::OptionsError;
use crate::events::*;
use crate::state::*;

#[derive(Accounts)]
pub struct Settle<'info> {
    #[account(
        constraint = oracle_authority.key() == config.oracle_authority @ OptionsError::Unauthorized,
    )]
    pub oracle_authority: Signer<'info>,

    #[account(seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, Config>,

    #[account(mut)]
    pub series: Account<'info, OptionSeries>,
}

/// Fixes the series payout from one index observation. The oracle feed
/// may sweep every expired series of a station with this; repeats fail
/// `AlreadySettled` and change nothing.
pub fn settle(ctx: Context<Settle>, index_value: u64, observed_at: i64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let series = &mut ctx.accounts.series;

    let settlement_value = series.settle(index_value, observed_at, now)?;

    msg!(
        "Settled station {} at index {} -> {} per unit",
        series.station,
        index_value,
        settlement_value
    );

    emit!(SeriesSettled {
        series: series.key(),
        index_value,
        observed_at,
        settlement_value,
        timestamp: now,
    });

    Ok(())
}
