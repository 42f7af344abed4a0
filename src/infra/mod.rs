mod config;
mod export;
mod random;

pub use config::*;
pub use export::*;
pub use random::*;
