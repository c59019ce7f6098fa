pub mod pool;
pub mod stake_position;

pub use pool::*;
pub use stake_position::*;
