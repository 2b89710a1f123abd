use anchor_lang::prelude::*;

use super::ConfigureSpendLimit;
use crate::events::SpendingLimitRemoved;

pub fn remove_spending_limit(ctx: Context<ConfigureSpendLimit>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    ctx.accounts
        .wallet_state
        .remove_spending_limit(&ctx.accounts.owner.key(), now)?;

    emit!(SpendingLimitRemoved {
        smart_wallet: ctx.accounts.smart_wallet.key(),
        timestamp: now,
    });
    Ok(())
}
