use anchor_lang::prelude::*;

use super::ConfigureSpendLimit;
use crate::events::SpendLimitEnabled;

pub fn enable_spend_limit(ctx: Context<ConfigureSpendLimit>) -> Result<()> {
    ctx.accounts
        .wallet_state
        .enable_spend_limit(&ctx.accounts.owner.key())?;

    emit!(SpendLimitEnabled {
        smart_wallet: ctx.accounts.smart_wallet.key(),
        timestamp: Clock::get()?.unix_timestamp,
    });
    Ok(())
}
