pub mod enable_spend_limit;
pub mod remove_spending_limit;
pub mod set_spending_limit;

pub use enable_spend_limit::*;
pub use remove_spending_limit::*;
pub use set_spending_limit::*;

use anchor_lang::prelude::*;

use crate::state::WalletState;

/// Accounts shared by the owner-only spend limit instructions
#[derive(Accounts)]
pub struct ConfigureSpendLimit<'info> {
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [WalletState::PREFIX_SEED, smart_wallet.key().as_ref()],
        bump,
    )]
    pub wallet_state: Box<Account<'info, WalletState>>,

    /// CHECK: Only used as a seed of `wallet_state`.
    pub smart_wallet: UncheckedAccount<'info>,
}
