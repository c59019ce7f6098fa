use anchor_lang::prelude::*;

#[error_code]
pub enum OptionsError {
    #[msg("Only the configured authority can perform this action")]
    Unauthorized,

    #[msg("Fee must be between 0 and 10000 basis points")]
    InvalidFee,

    #[msg("Premium is below the configured floor")]
    PremiumTooLow,

    #[msg("Expiry must be in the future")]
    ExpiryNotFuture,

    #[msg("Expiry exceeds the maximum tenor")]
    ExpiryTooFar,

    #[msg("Strike must be greater than zero")]
    InvalidStrike,

    #[msg("Total supply must be greater than zero")]
    InvalidSupply,

    #[msg("Call index cap must exceed the strike")]
    InvalidIndexCap,

    #[msg("Station identifier is too long")]
    StationNameTooLong,

    #[msg("Purchase quantity must be greater than zero")]
    InvalidQuantity,

    #[msg("Creator does not hold enough collateral")]
    InsufficientCollateral,

    #[msg("Buyer does not hold enough funds for the premium")]
    InsufficientPayment,

    #[msg("Series has expired and no longer accepts purchases")]
    SeriesExpired,

    #[msg("Series is already settled")]
    SeriesSettled,

    #[msg("Purchase would exceed the series supply")]
    OversubscribedSeries,

    #[msg("Series has not expired yet")]
    NotYetExpired,

    #[msg("Series is already settled")]
    AlreadySettled,

    #[msg("Index observation is stale for this settlement")]
    StaleIndexData,

    #[msg("Series is not settled yet")]
    NotSettled,

    #[msg("Excess collateral was already reclaimed")]
    AlreadyReclaimed,

    #[msg("Math overflow")]
    MathOverflow,
}
