use anchor_lang::prelude::*;

use super::ManageRecovery;
use crate::events::RecoveryInitiated;

pub fn init_recovery(ctx: Context<ManageRecovery>, new_owner: Pubkey) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let guardian = ctx.accounts.caller.key();
    let wallet_state = &mut ctx.accounts.wallet_state;
    wallet_state.init_recovery(&guardian, new_owner, now)?;

    let executable_at = wallet_state
        .recovery
        .matures_at(wallet_state.recovery_confirmation_time);
    msg!("Recovery to {} executable at {}", new_owner, executable_at);

    emit!(RecoveryInitiated {
        smart_wallet: ctx.accounts.smart_wallet.key(),
        guardian,
        new_owner,
        executable_at,
        timestamp: now,
    });
    Ok(())
}
