pub mod config;
pub mod position;
pub mod series;

pub use config::*;
pub use position::*;
pub use series::*;
