use anchor_lang::prelude::*;

#[error_code]
pub enum StakingError {
    #[msg("Reward rate must be greater than zero")]
    InvalidRate,

    #[msg("Stake and reward assets must be distinct mints")]
    InvalidAsset,

    #[msg("Lock period must not be negative")]
    InvalidLockPeriod,

    #[msg("Pool is not accepting new stakes")]
    PoolInactive,

    #[msg("Pool must be paused before an emergency withdrawal")]
    PoolStillActive,

    #[msg("Stake amount is below the pool minimum")]
    BelowMinimum,

    #[msg("Stake is still locked")]
    StillLocked,

    #[msg("Insufficient staked balance")]
    InsufficientBalance,

    #[msg("Only the pool authority can perform this action")]
    Unauthorized,

    #[msg("Math overflow")]
    MathOverflow,
}
