use anchor_lang::prelude::*;

use super::ManageRecovery;
use crate::error::GuardedWalletError;
use crate::events::RecoveryConfirmationTimeSet;
use crate::security::validation;

pub fn set_recovery_confirmation_time(ctx: Context<ManageRecovery>, duration: u64) -> Result<()> {
    let duration = validation::validate_duration(
        duration,
        true,
        GuardedWalletError::InvalidRecoveryConfirmationTime,
    )?;
    ctx.accounts
        .wallet_state
        .set_recovery_confirmation_time(&ctx.accounts.caller.key(), duration)?;

    emit!(RecoveryConfirmationTimeSet {
        smart_wallet: ctx.accounts.smart_wallet.key(),
        confirmation_time: duration,
        timestamp: Clock::get()?.unix_timestamp,
    });
    Ok(())
}
