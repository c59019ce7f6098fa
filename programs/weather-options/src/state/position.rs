use anchor_lang::prelude::*;

use crate::errors::OptionsError;
use crate::state::OptionSeries;

/// One holder's position in one series. Zeroed at claim, never closed.
#[account]
pub struct OptionPosition {
    pub owner: Pubkey,
    pub series: Pubkey,
    pub quantity: u64,
    /// Volume-weighted average premium paid per unit.
    pub entry_premium: u64,
    pub bump: u8,
}

impl OptionPosition {
    pub const LEN: usize = 8 + // discriminator
        32 + // owner
        32 + // series
        8 +  // quantity
        8 +  // entry_premium
        1; // bump

    /// Folds a purchase of `quantity` units costing `cost` in total into
    /// the volume-weighted cost basis.
    pub fn apply_purchase(&mut self, quantity: u64, cost: u64) -> Result<()> {
        self.entry_premium =
            weather_math::weighted_entry_premium(self.entry_premium, self.quantity, cost, quantity)
                .ok_or(OptionsError::MathOverflow)?;
        self.quantity = self
            .quantity
            .checked_add(quantity)
            .ok_or(OptionsError::MathOverflow)?;
        Ok(())
    }

    /// Pays out a settled position and zeroes it. Claiming an already
    /// zeroed position is a silent no-op so at-least-once retries from
    /// the caller side are harmless.
    pub fn claim(&mut self, series: &OptionSeries) -> Result<u64> {
        require!(series.settled, OptionsError::NotSettled);

        if self.quantity == 0 {
            return Ok(0);
        }

        let payout = series
            .settlement_value
            .checked_mul(self.quantity)
            .ok_or(OptionsError::MathOverflow)?;
        self.quantity = 0;
        Ok(payout)
    }
}
