use anchor_lang::prelude::*;

/// Solana's built-in Ed25519 signature verification program ID
pub const ED25519_PROGRAM_ID: Pubkey = pubkey!("Ed25519SigVerify111111111111111111111111111");

/// Seed used for smart wallet PDA derivation
pub const SMART_WALLET_SEED: &[u8] = b"smart_wallet";

/// Length of one spending window in seconds, used until the config says otherwise
pub const DEFAULT_SPEND_WINDOW: i64 = 86_400;

/// Delay between `init_recovery` and `execute_recovery`, used until the config says otherwise
pub const DEFAULT_RECOVERY_CONFIRMATION_TIME: i64 = 1;

/// Returned by `is_valid_signature` when the owner signed the hash
pub const MAGIC_VALUE: [u8; 4] = [0x16, 0x26, 0xba, 0x7e];

/// Returned by `is_valid_signature` for every other input
pub const INVALID_SIGNATURE: [u8; 4] = [0xff, 0xff, 0xff, 0xff];

/// Interface id of `supports_interface` itself
pub const INTERFACE_DETECTION_ID: [u8; 4] = [0x01, 0xff, 0xc9, 0xa7];

/// Interface id of `is_valid_signature`
pub const SIGNATURE_VALIDATOR_ID: [u8; 4] = MAGIC_VALUE;

/// Instructions making up the spend limit interface
pub const SPEND_LIMIT_INSTRUCTIONS: [&str; 5] = [
    "enable_spend_limit",
    "set_spending_limit",
    "remove_spending_limit",
    "get_limit",
    "get_limit_info",
];

/// Instructions making up the social recovery interface
pub const SOCIAL_RECOVERY_INSTRUCTIONS: [&str; 5] = [
    "set_guardian",
    "set_recovery_confirmation_time",
    "init_recovery",
    "cancel_recovery",
    "execute_recovery",
];
