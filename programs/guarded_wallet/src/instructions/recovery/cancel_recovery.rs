use anchor_lang::prelude::*;

use super::ManageRecovery;
use crate::events::RecoveryCancelled;

pub fn cancel_recovery(ctx: Context<ManageRecovery>) -> Result<()> {
    let wallet_state = &mut ctx.accounts.wallet_state;
    let cancelled_new_owner = wallet_state.recovery.new_owner;
    wallet_state.cancel_recovery(&ctx.accounts.caller.key())?;

    emit!(RecoveryCancelled {
        smart_wallet: ctx.accounts.smart_wallet.key(),
        cancelled_new_owner,
        timestamp: Clock::get()?.unix_timestamp,
    });
    Ok(())
}
