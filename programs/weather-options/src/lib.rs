pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;

use anchor_lang::prelude::*;

pub use instructions::*;
pub use state::*;

declare_id!("MemoSq4gqABAXKb96qnH8TysNcWxMyWCqXgDLGmfcHr");

#[program]
pub mod weather_options {
    use super::*;

    pub fn initialize(
        ctx: Context<Initialize>,
        oracle_authority: Pubkey,
        fee_bps: u16,
        min_premium: u64,
    ) -> Result<()> {
        instructions::initialize::initialize(ctx, oracle_authority, fee_bps, min_premium)
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
        instructions::create_series::create_series(
            ctx,
            station,
            strike,
            premium,
            expiry,
            total_supply,
            is_call,
            index_cap,
        )
    }

    pub fn purchase(ctx: Context<Purchase>, quantity: u64) -> Result<()> {
        instructions::purchase::purchase(ctx, quantity)
    }

    pub fn settle(ctx: Context<Settle>, index_value: u64, observed_at: i64) -> Result<()> {
        instructions::settle::settle(ctx, index_value, observed_at)
    }

    pub fn claim_payout(ctx: Context<ClaimPayout>) -> Result<()> {
        instructions::claim_payout::claim_payout(ctx)
    }

    pub fn reclaim_collateral(ctx: Context<ReclaimCollateral>) -> Result<()> {
        instructions::reclaim_collateral::reclaim_collateral(ctx)
    }

    pub fn update_fee(ctx: Context<UpdateFee>, new_fee_bps: u16) -> Result<()> {
        instructions::update_fee::update_fee(ctx, new_fee_bps)
    }

    pub fn set_oracle_authority(
        ctx: Context<SetOracleAuthority>,
        new_oracle_authority: Pubkey,
    ) -> Result<()> {
        instructions::set_oracle_authority::set_oracle_authority(ctx, new_oracle_authority)
    }
}
