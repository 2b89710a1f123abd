use anchor_lang::prelude::*;

use super::ManageRecovery;
use crate::events::RecoveryExecuted;

pub fn execute_recovery(ctx: Context<ManageRecovery>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let caller = ctx.accounts.caller.key();
    let wallet_state = &mut ctx.accounts.wallet_state;
    let old_owner = wallet_state.execute_recovery(&caller, now)?;

    RecoveryExecuted::emit_event(
        ctx.accounts.smart_wallet.key(),
        caller,
        old_owner,
        wallet_state.owner,
    )
}
