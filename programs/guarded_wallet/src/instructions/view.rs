use anchor_lang::prelude::*;

use crate::state::{RecoveryRequest, SpendLimit, WalletState};

pub fn get_limit(ctx: Context<ReadWalletState>) -> Result<u64> {
    Ok(ctx.accounts.wallet_state.limit.cap)
}

pub fn get_limit_info(ctx: Context<ReadWalletState>) -> Result<SpendLimit> {
    Ok(ctx.accounts.wallet_state.limit)
}

pub fn get_recovery_request(ctx: Context<ReadWalletState>) -> Result<RecoveryRequest> {
    Ok(ctx.accounts.wallet_state.recovery)
}

/// Read-only view of a wallet, answered through return data
#[derive(Accounts)]
pub struct ReadWalletState<'info> {
    #[account(
        seeds = [WalletState::PREFIX_SEED, smart_wallet.key().as_ref()],
        bump,
    )]
    pub wallet_state: Box<Account<'info, WalletState>>,

    /// CHECK: Only used as a seed of `wallet_state`.
    pub smart_wallet: UncheckedAccount<'info>,
}
