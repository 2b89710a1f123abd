use anchor_lang::prelude::*;

use super::ManageRecovery;
use crate::events::GuardianSet;

pub fn set_guardian(ctx: Context<ManageRecovery>, guardian: Pubkey) -> Result<()> {
    let wallet_state = &mut ctx.accounts.wallet_state;
    let old_guardian = wallet_state.guardian;
    wallet_state.set_guardian(&ctx.accounts.caller.key(), guardian)?;

    msg!("Guardian: {} -> {}", old_guardian, guardian);
    emit!(GuardianSet {
        smart_wallet: ctx.accounts.smart_wallet.key(),
        old_guardian,
        new_guardian: guardian,
        timestamp: Clock::get()?.unix_timestamp,
    });
    Ok(())
}
