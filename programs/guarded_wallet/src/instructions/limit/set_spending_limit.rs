use anchor_lang::prelude::*;

use super::ConfigureSpendLimit;
use crate::events::SpendingLimitSet;

pub fn set_spending_limit(ctx: Context<ConfigureSpendLimit>, amount: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let wallet_state = &mut ctx.accounts.wallet_state;
    wallet_state.set_spending_limit(&ctx.accounts.owner.key(), amount, now)?;

    msg!(
        "Spending limit set to {} until {}",
        wallet_state.limit.cap,
        wallet_state.limit.reset_at
    );
    emit!(SpendingLimitSet {
        smart_wallet: ctx.accounts.smart_wallet.key(),
        cap: wallet_state.limit.cap,
        reset_at: wallet_state.limit.reset_at,
        timestamp: now,
    });
    Ok(())
}
