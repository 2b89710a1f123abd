use anchor_lang::error_code;

/// Error definitions for the guarded wallet program
///
/// Every guard failure reverts the whole instruction. Variants are grouped by
/// [`ErrorKind`] so callers can tell an authorization failure from a policy
/// rejection without parsing the message.
#[error_code]
pub enum GuardedWalletError {
    // === Authorization Errors ===
    #[msg("Caller is neither the entry point nor the owner")]
    NotEntryPointOrOwner,
    #[msg("Caller is not the wallet owner")]
    NotOwner,
    #[msg("Caller is not the wallet guardian")]
    NotGuardian,
    #[msg("Caller is neither the owner nor the guardian")]
    NotOwnerOrGuardian,
    #[msg("Unauthorized admin")]
    UnauthorizedAdmin,

    // === Configuration Errors ===
    #[msg("Spending limit must be greater than zero")]
    ZeroSpendingLimit,
    #[msg("Spending limit is not enabled")]
    SpendLimitDisabled,
    #[msg("Spending limit cannot be changed until the current window expires")]
    InvalidLimitUpdate,
    #[msg("New owner cannot be the default public key")]
    InvalidNewOwner,
    #[msg("Recovery confirmation time cannot be negative")]
    InvalidRecoveryConfirmationTime,
    #[msg("Spend window must be greater than zero")]
    InvalidSpendWindow,
    #[msg("Wallet id zero is reserved")]
    InvalidWalletId,
    #[msg("Program is paused")]
    ProgramPaused,

    // === Spend Limit Errors ===
    #[msg("Amount exceeds the remaining spending allowance")]
    SpendingLimitExceeded,

    // === Recovery Errors ===
    #[msg("No recovery request is pending")]
    NoPendingRecovery,
    #[msg("Recovery confirmation time has not elapsed")]
    RecoveryDelayNotElapsed,

    // === Execution Errors ===
    #[msg("CPI data exceeds maximum allowed size")]
    CpiDataTooLarge,
    #[msg("Too many remaining accounts")]
    TooManyRemainingAccounts,
    #[msg("CPI data provided without a CPI program")]
    CpiProgramMissing,
    #[msg("Reentrancy detected")]
    ReentrancyDetected,
    #[msg("Program not executable")]
    ProgramNotExecutable,
    #[msg("Smart wallet balance is insufficient")]
    InsufficientBalance,
    #[msg("Transfer amount would overflow")]
    TransferAmountOverflow,
    #[msg("Smart wallet lost more lamports than the declared value")]
    UnexpectedBalanceChange,
    #[msg("Invalid remaining accounts")]
    InvalidRemainingAccounts,
    #[msg("Smart wallet cannot send lamports to itself")]
    SelfTransfer,
}

/// Coarse classification of [`GuardedWalletError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Caller is not the principal the instruction requires
    Authorization,
    /// Rejected configuration or update timing
    InvalidConfiguration,
    /// Spend exceeds the window allowance
    LimitExceeded,
    /// Recovery request missing or not yet mature
    RecoveryState,
    /// Forwarding the call failed its preconditions
    Execution,
}

impl GuardedWalletError {
    const ALL: [GuardedWalletError; 26] = [
        Self::NotEntryPointOrOwner,
        Self::NotOwner,
        Self::NotGuardian,
        Self::NotOwnerOrGuardian,
        Self::UnauthorizedAdmin,
        Self::ZeroSpendingLimit,
        Self::SpendLimitDisabled,
        Self::InvalidLimitUpdate,
        Self::InvalidNewOwner,
        Self::InvalidRecoveryConfirmationTime,
        Self::InvalidSpendWindow,
        Self::InvalidWalletId,
        Self::ProgramPaused,
        Self::SpendingLimitExceeded,
        Self::NoPendingRecovery,
        Self::RecoveryDelayNotElapsed,
        Self::CpiDataTooLarge,
        Self::TooManyRemainingAccounts,
        Self::CpiProgramMissing,
        Self::ReentrancyDetected,
        Self::ProgramNotExecutable,
        Self::InsufficientBalance,
        Self::TransferAmountOverflow,
        Self::UnexpectedBalanceChange,
        Self::InvalidRemainingAccounts,
        Self::SelfTransfer,
    ];

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotEntryPointOrOwner
            | Self::NotOwner
            | Self::NotGuardian
            | Self::NotOwnerOrGuardian
            | Self::UnauthorizedAdmin => ErrorKind::Authorization,
            Self::ZeroSpendingLimit
            | Self::SpendLimitDisabled
            | Self::InvalidLimitUpdate
            | Self::InvalidNewOwner
            | Self::InvalidRecoveryConfirmationTime
            | Self::InvalidSpendWindow
            | Self::InvalidWalletId
            | Self::ProgramPaused => ErrorKind::InvalidConfiguration,
            Self::SpendingLimitExceeded => ErrorKind::LimitExceeded,
            Self::NoPendingRecovery | Self::RecoveryDelayNotElapsed => ErrorKind::RecoveryState,
            Self::CpiDataTooLarge
            | Self::TooManyRemainingAccounts
            | Self::CpiProgramMissing
            | Self::ReentrancyDetected
            | Self::ProgramNotExecutable
            | Self::InsufficientBalance
            | Self::TransferAmountOverflow
            | Self::UnexpectedBalanceChange
            | Self::InvalidRemainingAccounts
            | Self::SelfTransfer => ErrorKind::Execution,
        }
    }

    /// Look up the variant behind an Anchor error code number
    pub fn from_code(code: u32) -> Option<Self> {
        Self::ALL.iter().copied().find(|e| u32::from(*e) == code)
    }
}

impl ErrorKind {
    /// Classify an error returned by one of the program's operations.
    ///
    /// Returns `None` for errors raised by Anchor or the runtime itself.
    pub fn of(err: &anchor_lang::error::Error) -> Option<Self> {
        match err {
            anchor_lang::error::Error::AnchorError(e) => {
                GuardedWalletError::from_code(e.error_code_number).map(|e| e.kind())
            }
            anchor_lang::error::Error::ProgramError(_) => None,
        }
    }
}
