pub mod claim;
pub mod create_pool;
pub mod emergency_withdraw;
pub mod fund_rewards;
pub mod set_pool_status;
pub mod set_reward_rate;
pub mod stake;
pub mod withdraw;

pub use claim::*;
pub use create_pool::*;
pub use emergency_withdraw::*;
pub use fund_rewards::*;
pub use set_pool_status::*;
pub use set_reward_rate::*;
pub use stake::*;
pub use withdraw::*;
