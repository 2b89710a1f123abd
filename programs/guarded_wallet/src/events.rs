use anchor_lang::prelude::*;

/// Event emitted when program is initialized
#[event]
pub struct ProgramInitialized {
    pub authority: Pubkey,
    pub default_spend_window: i64,
    pub default_recovery_confirmation_time: i64,
    pub timestamp: i64,
}

/// Event emitted when program configuration is updated
#[event]
pub struct ConfigUpdated {
    pub authority: Pubkey,
    pub update_type: String,
    pub old_value: String,
    pub new_value: String,
    pub timestamp: i64,
}

/// Event emitted when a new smart wallet is created
#[event]
pub struct SmartWalletCreated {
    pub smart_wallet: Pubkey,
    pub wallet_id: u64,
    pub owner: Pubkey,
    pub entry_point: Pubkey,
    pub guardian: Pubkey,
    pub timestamp: i64,
}

/// Event emitted when a transaction is executed
#[event]
pub struct TransactionExecuted {
    pub smart_wallet: Pubkey,
    pub caller: Pubkey,
    pub destination: Pubkey,
    pub cpi_program: Option<Pubkey>,
    pub value: u64,
    /// Allowance left in the current window, `None` when no limit is enforced
    pub available: Option<u64>,
    pub timestamp: i64,
}

#[event]
pub struct SpendLimitEnabled {
    pub smart_wallet: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct SpendingLimitSet {
    pub smart_wallet: Pubkey,
    pub cap: u64,
    pub reset_at: i64,
    pub timestamp: i64,
}

#[event]
pub struct SpendingLimitRemoved {
    pub smart_wallet: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct GuardianSet {
    pub smart_wallet: Pubkey,
    pub old_guardian: Pubkey,
    pub new_guardian: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct RecoveryConfirmationTimeSet {
    pub smart_wallet: Pubkey,
    pub confirmation_time: i64,
    pub timestamp: i64,
}

/// Event emitted when the guardian starts (or replaces) a recovery
#[event]
pub struct RecoveryInitiated {
    pub smart_wallet: Pubkey,
    pub guardian: Pubkey,
    pub new_owner: Pubkey,
    pub executable_at: i64,
    pub timestamp: i64,
}

#[event]
pub struct RecoveryCancelled {
    pub smart_wallet: Pubkey,
    pub cancelled_new_owner: Pubkey,
    pub timestamp: i64,
}

/// Event emitted when ownership moves to the recovered key
#[event]
pub struct RecoveryExecuted {
    pub smart_wallet: Pubkey,
    pub executed_by: Pubkey,
    pub old_owner: Pubkey,
    pub new_owner: Pubkey,
    pub timestamp: i64,
}

impl TransactionExecuted {
    pub fn emit_event(
        smart_wallet: Pubkey,
        caller: Pubkey,
        destination: Pubkey,
        cpi_program: Option<Pubkey>,
        value: u64,
        available: Option<u64>,
    ) -> Result<()> {
        emit!(Self {
            smart_wallet,
            caller,
            destination,
            cpi_program,
            value,
            available,
            timestamp: Clock::get()?.unix_timestamp,
        });
        Ok(())
    }
}

impl RecoveryExecuted {
    pub fn emit_event(
        smart_wallet: Pubkey,
        executed_by: Pubkey,
        old_owner: Pubkey,
        new_owner: Pubkey,
    ) -> Result<()> {
        emit!(Self {
            smart_wallet,
            executed_by,
            old_owner,
            new_owner,
            timestamp: Clock::get()?.unix_timestamp,
        });
        Ok(())
    }
}
