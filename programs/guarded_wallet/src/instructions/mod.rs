pub mod admin;
pub mod create_smart_wallet;
pub mod execute;
pub mod initialize;
pub mod limit;
pub mod recovery;
pub mod validator;
pub mod view;

pub use admin::*;
pub use create_smart_wallet::*;
pub use execute::*;
pub use initialize::*;
pub use limit::*;
pub use recovery::*;
pub use validator::*;
pub use view::*;
