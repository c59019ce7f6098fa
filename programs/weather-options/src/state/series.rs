use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::OptionsError;

/// One weather-indexed option series.
///
/// Lifecycle: open (purchases allowed while `now < expiry`) ->
/// expired-unsettled -> settled. Settlement is one-way; the strike,
/// expiry, side, and cap never change after creation.
///
/// `settlement_value` is money per unit *held*: a holder of `q` units is
/// paid `settlement_value * q`, with no further division by supply.
#[account]
pub struct OptionSeries {
    pub creator: Pubkey,
    pub station: String,
    /// Strike in index units (e.g. millimetres of rainfall).
    pub strike: u64,
    /// Premium per unit, in the settlement mint.
    pub premium: u64,
    pub expiry: i64,
    pub is_call: bool,
    /// Index value at which a call payout stops growing. Bounds the
    /// worst-case obligation; ignored for puts, which the strike bounds.
    pub index_cap: u64,
    pub total_supply: u64,
    pub purchased: u64,
    pub settled: bool,
    pub settlement_value: u64,
    pub collateral: u64,
    pub reclaimed: bool,
    pub created_at: i64,
    pub collateral_vault: Pubkey,
    pub bump: u8,
    pub collateral_vault_bump: u8,
}

impl OptionSeries {
    pub const LEN: usize = 8 + // discriminator
        32 + // creator
        4 + MAX_STATION_LEN + // station
        8 +  // strike
        8 +  // premium
        8 +  // expiry
        1 +  // is_call
        8 +  // index_cap
        8 +  // total_supply
        8 +  // purchased
        1 +  // settled
        8 +  // settlement_value
        8 +  // collateral
        1 +  // reclaimed
        8 +  // created_at
        32 + // collateral_vault
        1 +  // bump
        1; // collateral_vault_bump

    /// Validates the terms of a new series and returns the collateral the
    /// creator must post. Rejected terms never reach the vault transfer.
    pub fn validate_terms(
        station: &str,
        strike: u64,
        premium: u64,
        expiry: i64,
        total_supply: u64,
        is_call: bool,
        index_cap: u64,
        min_premium: u64,
        now: i64,
    ) -> Result<u64> {
        require!(
            station.len() <= MAX_STATION_LEN,
            OptionsError::StationNameTooLong
        );
        require!(strike > 0, OptionsError::InvalidStrike);
        require!(total_supply > 0, OptionsError::InvalidSupply);
        require!(premium >= min_premium, OptionsError::PremiumTooLow);
        require!(expiry > now, OptionsError::ExpiryNotFuture);
        require!(
            expiry - now <= MAX_TENOR,
            OptionsError::ExpiryTooFar
        );
        if is_call {
            require!(index_cap > strike, OptionsError::InvalidIndexCap);
        }

        weather_math::required_collateral(is_call, strike, index_cap, total_supply)
            .ok_or_else(|| OptionsError::MathOverflow.into())
    }

    /// Registers a purchase and returns its total cost in premium terms.
    pub fn purchase(&mut self, quantity: u64, now: i64) -> Result<u64> {
        require!(!self.settled, OptionsError::SeriesSettled);
        require!(now < self.expiry, OptionsError::SeriesExpired);
        require!(quantity > 0, OptionsError::InvalidQuantity);

        let purchased = self
            .purchased
            .checked_add(quantity)
            .ok_or(OptionsError::MathOverflow)?;
        require!(
            purchased <= self.total_supply,
            OptionsError::OversubscribedSeries
        );
        let cost = self
            .premium
            .checked_mul(quantity)
            .ok_or(OptionsError::MathOverflow)?;

        self.purchased = purchased;
        Ok(cost)
    }

    /// Fixes the per-unit settlement value from an index observation.
    /// One-way: a second call fails `AlreadySettled` without touching
    /// state, so oracle sweeps may retry blindly.
    pub fn settle(&mut self, index_value: u64, observed_at: i64, now: i64) -> Result<u64> {
        require!(!self.settled, OptionsError::AlreadySettled);
        require!(now >= self.expiry, OptionsError::NotYetExpired);
        require!(
            observed_at <= now && observed_at >= self.expiry.saturating_sub(MAX_INDEX_AGE),
            OptionsError::StaleIndexData
        );

        self.settlement_value =
            weather_math::payout_per_unit(self.is_call, self.strike, index_value, self.index_cap);
        self.settled = true;
        Ok(self.settlement_value)
    }

    /// Excess collateral the creator may take back after settlement; the
    /// aggregate payout owed to purchased units stays reserved in the
    /// vault. Returns `(excess, reserved)`.
    pub fn reclaim(&mut self) -> Result<(u64, u64)> {
        require!(self.settled, OptionsError::NotSettled);
        require!(!self.reclaimed, OptionsError::AlreadyReclaimed);

        let reserved = self
            .settlement_value
            .checked_mul(self.purchased)
            .ok_or(OptionsError::MathOverflow)?;
        let excess = self
            .collateral
            .checked_sub(reserved)
            .ok_or(OptionsError::MathOverflow)?;
        self.reclaimed = true;
        Ok((excess, reserved))
    }
}
