use anchor_lang::prelude::*;

#[event]
pub struct PoolCreated {
    pub pool: Pubkey,
    pub authority: Pubkey,
    pub stake_mint: Pubkey,
    pub reward_mint: Pubkey,
    pub reward_rate_per_second: u64,
    pub lock_period: i64,
    pub min_stake: u64,
    pub timestamp: i64,
}

#[event]
pub struct Staked {
    pub pool: Pubkey,
    pub user: Pubkey,
    pub amount: u64,
    pub balance: u64,
    pub total_staked: u64,
    pub lock_end_time: i64,
    pub timestamp: i64,
}

#[event]
pub struct Withdrawn {
    pub pool: Pubkey,
    pub user: Pubkey,
    pub amount: u64,
    pub balance: u64,
    pub total_staked: u64,
    pub timestamp: i64,
}

#[event]
pub struct RewardsClaimed {
    pub pool: Pubkey,
    pub user: Pubkey,
    pub amount: u64,
    pub lifetime_rewards: u64,
    pub timestamp: i64,
}

#[event]
pub struct EmergencyWithdrawn {
    pub pool: Pubkey,
    pub user: Pubkey,
    pub amount: u64,
    pub forfeited_rewards: u64,
    pub total_staked: u64,
    pub timestamp: i64,
}

#[event]
pub struct RewardRateUpdated {
    pub pool: Pubkey,
    pub old_rate: u64,
    pub new_rate: u64,
    pub timestamp: i64,
}

#[event]
pub struct PoolStatusChanged {
    pub pool: Pubkey,
    pub active: bool,
    pub timestamp: i64,
}

#[event]
pub struct RewardsFunded {
    pub pool: Pubkey,
    pub funder: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}
