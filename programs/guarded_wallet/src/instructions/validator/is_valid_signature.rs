use anchor_lang::{prelude::*, solana_program::sysvar::instructions::load_instruction_at_checked};

use crate::constants::INVALID_SIGNATURE;
use crate::state::WalletState;
use crate::utils::recover_ed25519_signer;
use anchor_lang::solana_program::sysvar::instructions::ID as IX_ID;

/// Answer `MAGIC_VALUE` when the current owner signed `hash`.
///
/// The signature itself is checked by the native Ed25519 instruction at
/// `verify_instruction_index`; this only matches its entries. Bad input
/// yields `INVALID_SIGNATURE` instead of an error.
pub fn is_valid_signature(
    ctx: Context<IsValidSignature>,
    hash: [u8; 32],
    signature: [u8; 64],
    verify_instruction_index: u8,
) -> Result<[u8; 4]> {
    let verify_ix = match load_instruction_at_checked(
        verify_instruction_index as usize,
        &ctx.accounts.ix_sysvar,
    ) {
        Ok(ix) => ix,
        Err(_) => {
            msg!("No instruction at index {}", verify_instruction_index);
            return Ok(INVALID_SIGNATURE);
        }
    };

    let signer = recover_ed25519_signer(&verify_ix, &hash, &signature);
    Ok(ctx.accounts.wallet_state.signature_status(signer))
}

#[derive(Accounts)]
pub struct IsValidSignature<'info> {
    #[account(
        seeds = [WalletState::PREFIX_SEED, smart_wallet.key().as_ref()],
        bump,
    )]
    pub wallet_state: Box<Account<'info, WalletState>>,

    /// CHECK: Only used as a seed of `wallet_state`.
    pub smart_wallet: UncheckedAccount<'info>,

    #[account(address = IX_ID)]
    /// CHECK: Sysvar for instructions.
    pub ix_sysvar: UncheckedAccount<'info>,
}
