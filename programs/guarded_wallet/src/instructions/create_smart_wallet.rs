use anchor_lang::prelude::*;

use crate::{
    constants::SMART_WALLET_SEED,
    error::GuardedWalletError,
    events::SmartWalletCreated,
    state::{Config, RecoveryRequest, SpendLimit, WalletState},
};

#[derive(AnchorSerialize, AnchorDeserialize, Clone)]
pub struct CreateSmartWalletArgs {
    /// Unique wallet id, zero is reserved
    pub wallet_id: u64,
    /// Relayer allowed to call `execute` on the owner's behalf
    pub entry_point: Pubkey,
    pub guardian: Option<Pubkey>,
}

pub fn create_smart_wallet(
    ctx: Context<CreateSmartWallet>,
    args: CreateSmartWalletArgs,
) -> Result<()> {
    let config = &ctx.accounts.config;
    require!(!config.is_paused, GuardedWalletError::ProgramPaused);
    require!(args.wallet_id != 0, GuardedWalletError::InvalidWalletId);

    let guardian = args.guardian.unwrap_or_default();
    let wallet_state = &mut ctx.accounts.wallet_state;
    wallet_state.set_inner(WalletState {
        id: args.wallet_id,
        bump: ctx.bumps.smart_wallet,
        owner: ctx.accounts.owner.key(),
        entry_point: args.entry_point,
        guardian,
        recovery_confirmation_time: config.default_recovery_confirmation_time,
        spend_window: config.default_spend_window,
        limit: SpendLimit::default(),
        recovery: RecoveryRequest::default(),
    });

    msg!("Smart wallet created: {}", ctx.accounts.smart_wallet.key());
    msg!("Owner: {}", ctx.accounts.owner.key());
    msg!("Wallet ID: {}", args.wallet_id);

    emit!(SmartWalletCreated {
        smart_wallet: ctx.accounts.smart_wallet.key(),
        wallet_id: args.wallet_id,
        owner: ctx.accounts.owner.key(),
        entry_point: args.entry_point,
        guardian,
        timestamp: Clock::get()?.unix_timestamp,
    });
    Ok(())
}

#[derive(Accounts)]
#[instruction(args: CreateSmartWalletArgs)]
pub struct CreateSmartWallet<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    /// CHECK: Any key may own a wallet; it is only recorded.
    pub owner: UncheckedAccount<'info>,

    /// The smart wallet PDA holding the lamports
    #[account(
        init,
        payer = payer,
        space = 0,
        seeds = [SMART_WALLET_SEED, args.wallet_id.to_le_bytes().as_ref()],
        bump
    )]
    /// CHECK: This account is only used for its public key, seeds and lamports.
    pub smart_wallet: UncheckedAccount<'info>,

    #[account(
        init,
        payer = payer,
        space = 8 + WalletState::INIT_SPACE,
        seeds = [WalletState::PREFIX_SEED, smart_wallet.key().as_ref()],
        bump
    )]
    pub wallet_state: Box<Account<'info, WalletState>>,

    #[account(
        seeds = [Config::PREFIX_SEED],
        bump,
    )]
    pub config: Box<Account<'info, Config>>,

    pub system_program: Program<'info, System>,
}
