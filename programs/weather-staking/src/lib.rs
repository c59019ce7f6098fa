pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;

use anchor_lang::prelude::*;

pub use instructions::*;
pub use state::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod weather_staking {
    use super::*;

    pub fn create_pool(
        ctx: Context<CreatePool>,
        reward_rate_per_second: u64,
        lock_period: i64,
        min_stake: u64,
    ) -> Result<()> {
        instructions::create_pool::create_pool(ctx, reward_rate_per_second, lock_period, min_stake)
    }

    pub fn stake(ctx: Context<Stake>, amount: u64) -> Result<()> {
        instructions::stake::stake(ctx, amount)
    }

    pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
        instructions::withdraw::withdraw(ctx, amount)
    }

    pub fn claim(ctx: Context<Claim>) -> Result<()> {
        instructions::claim::claim(ctx)
    }

    pub fn emergency_withdraw(ctx: Context<EmergencyWithdraw>) -> Result<()> {
        instructions::emergency_withdraw::emergency_withdraw(ctx)
    }

    pub fn set_reward_rate(ctx: Context<SetRewardRate>, new_rate: u64) -> Result<()> {
        instructions::set_reward_rate::set_reward_rate(ctx, new_rate)
    }

    pub fn set_pool_status(ctx: Context<SetPoolStatus>, active: bool) -> Result<()> {
        instructions::set_pool_status::set_pool_status(ctx, active)
    }

    pub fn fund_rewards(ctx: Context<FundRewards>, amount: u64) -> Result<()> {
        instructions::fund_rewards::fund_rewards(ctx, amount)
    }
}
