mod config;
mod recovery;
mod spend_limit;
mod wallet_state;

pub use config::*;
pub use recovery::*;
pub use spend_limit::*;
pub use wallet_state::*;
