pub mod cancel_recovery;
pub mod execute_recovery;
pub mod init_recovery;
pub mod set_guardian;
pub mod set_recovery_confirmation_time;

pub use cancel_recovery::*;
pub use execute_recovery::*;
pub use init_recovery::*;
pub use set_guardian::*;
pub use set_recovery_confirmation_time::*;

use anchor_lang::prelude::*;

use crate::state::WalletState;

/// Accounts shared by the recovery instructions; who may sign is decided per handler
#[derive(Accounts)]
pub struct ManageRecovery<'info> {
    pub caller: Signer<'info>,

    #[account(
        mut,
        seeds = [WalletState::PREFIX_SEED, smart_wallet.key().as_ref()],
        bump,
    )]
    pub wallet_state: Box<Account<'info, WalletState>>,

    /// CHECK: Only used as a seed of `wallet_state`.
    pub smart_wallet: UncheckedAccount<'info>,
}
