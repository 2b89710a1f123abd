pub mod is_valid_signature;
pub mod supports_interface;

pub use is_valid_signature::*;
pub use supports_interface::*;
