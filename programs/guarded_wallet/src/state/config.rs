use anchor_lang::prelude::*;

use crate::constants::{DEFAULT_RECOVERY_CONFIRMATION_TIME, DEFAULT_SPEND_WINDOW};

#[account]
#[derive(Debug, InitSpace)]
pub struct Config {
    pub authority: Pubkey,
    /// Spend window given to wallets created from now on
    pub default_spend_window: i64,
    /// Initial recovery confirmation time of new wallets
    pub default_recovery_confirmation_time: i64,
    pub is_paused: bool,
}

impl Config {
    pub const PREFIX_SEED: &'static [u8] = b"config";

    pub fn new(authority: Pubkey) -> Self {
        Self {
            authority,
            default_spend_window: DEFAULT_SPEND_WINDOW,
            default_recovery_confirmation_time: DEFAULT_RECOVERY_CONFIRMATION_TIME,
            is_paused: false,
        }
    }
}

#[derive(Debug, AnchorSerialize, AnchorDeserialize)]
pub enum UpdateConfigType {
    SpendWindow = 0,
    RecoveryConfirmationTime = 1,
    Admin = 2,
    PauseProgram = 3,
    UnpauseProgram = 4,
}
