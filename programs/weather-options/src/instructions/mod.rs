pub mod claim_payout;
pub mod create_series;
pub mod initialize;
pub mod purchase;
pub mod reclaim_collateral;
pub mod set_oracle_authority;
pub mod settle;
pub mod update_fee;

pub use claim_payout::*;
pub use create_series::*;
pub use initialize::*;
pub use purchase::*;
pub use reclaim_collateral::*;
pub use set_oracle_authority::*;
pub use settle::*;
pub use update_fee::*;
