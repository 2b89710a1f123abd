use anchor_lang::prelude::*;

// Security constants and validation utilities

/// Maximum allowed size for CPI data
pub const MAX_CPI_DATA_SIZE: usize = 1024;

/// Maximum allowed remaining accounts
pub const MAX_REMAINING_ACCOUNTS: usize = 32;

/// Security validation functions
pub mod validation {
    use super::*;
    use crate::error::GuardedWalletError;

    /// Validate CPI data size. Empty data means a plain lamport transfer.
    pub fn validate_cpi_data(cpi_data: &[u8]) -> Result<()> {
        require!(
            cpi_data.len() <= MAX_CPI_DATA_SIZE,
            GuardedWalletError::CpiDataTooLarge
        );
        Ok(())
    }

    /// Validate remaining accounts count
    pub fn validate_remaining_accounts(accounts: &[AccountInfo]) -> Result<()> {
        require!(
            accounts.len() <= MAX_REMAINING_ACCOUNTS,
            GuardedWalletError::TooManyRemainingAccounts
        );
        Ok(())
    }

    /// Validate lamport amount to prevent overflow
    pub fn validate_lamport_amount(amount: u64) -> Result<()> {
        require!(
            amount <= u64::MAX / 2,
            GuardedWalletError::TransferAmountOverflow
        );
        Ok(())
    }

    /// Validate program is executable
    pub fn validate_program_executable(program: &AccountInfo) -> Result<()> {
        require!(program.executable, GuardedWalletError::ProgramNotExecutable);
        Ok(())
    }

    /// Validate a config duration in seconds, rejecting it with `error`
    pub fn validate_duration(
        value: u64,
        allow_zero: bool,
        error: GuardedWalletError,
    ) -> Result<i64> {
        let duration = i64::try_from(value).map_err(|_| error)?;
        if !(allow_zero || duration > 0) {
            return Err(error.into());
        }
        Ok(duration)
    }
}

#[cfg(test)]
mod tests {
    use super::validation::*;
    use super::*;
    use crate::error::GuardedWalletError;

    #[test]
    fn cpi_data_size() {
        validate_cpi_data(&[]).unwrap();
        validate_cpi_data(&[0u8; MAX_CPI_DATA_SIZE]).unwrap();
        assert!(validate_cpi_data(&[0u8; MAX_CPI_DATA_SIZE + 1]).is_err());
    }

    #[test]
    fn lamport_amount_bound() {
        validate_lamport_amount(u64::MAX / 2).unwrap();
        assert!(validate_lamport_amount(u64::MAX / 2 + 1).is_err());
    }

    #[test]
    fn durations() {
        let error = GuardedWalletError::InvalidSpendWindow;
        assert_eq!(validate_duration(60, false, error).unwrap(), 60);
        assert!(validate_duration(0, false, error).is_err());
        assert_eq!(validate_duration(0, true, error).unwrap(), 0);
        assert!(validate_duration(u64::MAX, true, error).is_err());
    }
}
