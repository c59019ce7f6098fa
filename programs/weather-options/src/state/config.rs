use anchor_lang::prelude::*;

#[account]
pub struct Config {
    pub authority: Pubkey,
    /// Signer trusted to submit settlement index observations.
    pub oracle_authority: Pubkey,
    /// Mint premiums and collateral are denominated in.
    pub settlement_mint: Pubkey,
    pub fee_vault: Pubkey,
    pub fee_bps: u16,
    pub min_premium: u64,
    pub bump: u8,
    pub fee_vault_bump: u8,
}

impl Config {
    pub const LEN: usize = 8 + // discriminator
        32 + // authority
        32 + // oracle_authority
        32 + // settlement_mint
        32 + // fee_vault
        2 +  // fee_bps
        8 +  // min_premium
        1 +  // bump
        1; // fee_vault_bump
}
