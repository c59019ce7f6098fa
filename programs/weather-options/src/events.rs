use anchor_lang::prelude::*;

#[event]
pub struct ConfigInitialized {
    pub authority: Pubkey,
    pub oracle_authority: Pubkey,
    pub settlement_mint: Pubkey,
    pub fee_bps: u16,
    pub min_premium: u64,
    pub timestamp: i64,
}

#[event]
pub struct SeriesCreated {
    pub series: Pubkey,
    pub creator: Pubkey,
    pub station: String,
    pub strike: u64,
    pub premium: u64,
    pub expiry: i64,
    pub is_call: bool,
    pub index_cap: u64,
    pub total_supply: u64,
    pub collateral: u64,
    pub timestamp: i64,
}

#[event]
pub struct OptionsPurchased {
    pub series: Pubkey,
    pub buyer: Pubkey,
    pub quantity: u64,
    pub cost: u64,
    pub fee: u64,
    pub entry_premium: u64,
    pub purchased: u64,
    pub timestamp: i64,
}

#[event]
pub struct SeriesSettled {
    pub series: Pubkey,
    pub index_value: u64,
    pub observed_at: i64,
    pub settlement_value: u64,
    pub timestamp: i64,
}

#[event]
pub struct PayoutClaimed {
    pub series: Pubkey,
    pub holder: Pubkey,
    pub quantity: u64,
    pub payout: u64,
    pub timestamp: i64,
}

#[event]
pub struct CollateralReclaimed {
    pub series: Pubkey,
    pub creator: Pubkey,
    pub amount: u64,
    pub reserved: u64,
    pub timestamp: i64,
}

#[event]
pub struct FeeUpdated {
    pub old_fee_bps: u16,
    pub new_fee_bps: u16,
    pub timestamp: i64,
}

#[event]
pub struct OracleAuthorityUpdated {
    pub old_authority: Pubkey,
    pub new_authority: Pubkey,
    pub timestamp: i64,
}
