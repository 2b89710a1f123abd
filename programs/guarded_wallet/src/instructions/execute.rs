//! Forward a call from the smart wallet, enforcing the spending limit.
//!
//! High-level flow
//! 1. Authorization gate: the caller must be the entry point or the owner.
//! 2. The spend limit is checked and debited for `value`.
//! 3. The debited wallet state is written back before anything leaves the wallet.
//! 4. `value` lamports move to `destination`, then the optional CPI runs with
//!    the smart wallet PDA as signer.
//! 5. The PDA may not have lost more than `value` lamports overall.

use anchor_lang::prelude::*;
use anchor_lang::AccountsExit;

use crate::security::validation;
use crate::state::WalletState;
use crate::utils::{execute_cpi, transfer_sol_from_pda, PdaSigner};
use crate::{constants::SMART_WALLET_SEED, error::GuardedWalletError, events::TransactionExecuted};

pub trait Args {
    fn validate(&self) -> Result<()>;
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone)]
pub struct ExecuteArgs {
    /// Lamports sent from the smart wallet to `destination`
    pub value: u64,
    /// Instruction data for `cpi_program`; empty for a plain transfer
    pub data: Vec<u8>,
}

impl Args for ExecuteArgs {
    fn validate(&self) -> Result<()> {
        validation::validate_lamport_amount(self.value)?;
        validation::validate_cpi_data(&self.data)
    }
}

pub fn execute<'c: 'info, 'info>(
    ctx: Context<'_, '_, 'c, 'info, Execute<'info>>,
    args: ExecuteArgs,
) -> Result<()> {
    args.validate()?;
    validation::validate_remaining_accounts(ctx.remaining_accounts)?;

    let caller = ctx.accounts.caller.key();
    let now = Clock::get()?.unix_timestamp;

    // Steps 1-2: gate and debit
    ctx.accounts
        .wallet_state
        .authorize_execute(&caller, args.value, now)?;

    // Step 3: persist the debit before any external effect
    ctx.accounts.wallet_state.exit(&crate::ID)?;

    // Step 4: forward value and call
    let smart_wallet = ctx.accounts.smart_wallet.to_account_info();
    let balance_before = smart_wallet.lamports();
    let rent_exempt_minimum = Rent::get()?.minimum_balance(smart_wallet.data_len());

    transfer_sol_from_pda(
        &smart_wallet,
        &ctx.accounts.destination.to_account_info(),
        args.value,
        rent_exempt_minimum,
    )?;

    let cpi_program_key = if args.data.is_empty() {
        None
    } else {
        let cpi_program = ctx
            .accounts
            .cpi_program
            .as_ref()
            .ok_or(GuardedWalletError::CpiProgramMissing)?;

        require!(
            cpi_program.key() != crate::ID,
            GuardedWalletError::ReentrancyDetected
        );
        validation::validate_program_executable(cpi_program)?;

        let wallet_signer = PdaSigner::smart_wallet(
            ctx.accounts.wallet_state.id,
            ctx.accounts.wallet_state.bump,
        );
        execute_cpi(
            ctx.remaining_accounts,
            &args.data,
            &cpi_program.to_account_info(),
            &wallet_signer,
        )?;
        Some(cpi_program.key())
    };

    // Step 5: the call itself may not drain the wallet past the declared value
    require!(
        smart_wallet.lamports() >= balance_before.saturating_sub(args.value),
        GuardedWalletError::UnexpectedBalanceChange
    );

    let limit = &ctx.accounts.wallet_state.limit;
    TransactionExecuted::emit_event(
        smart_wallet.key(),
        caller,
        ctx.accounts.destination.key(),
        cpi_program_key,
        args.value,
        limit.enabled.then_some(limit.available),
    )?;
    Ok(())
}

/// Accounts context for `execute`
#[derive(Accounts)]
pub struct Execute<'info> {
    /// Entry point or owner
    pub caller: Signer<'info>,

    #[account(
        mut,
        seeds = [SMART_WALLET_SEED, wallet_state.id.to_le_bytes().as_ref()],
        bump = wallet_state.bump,
    )]
    /// CHECK: Only used for key, seeds and lamports.
    pub smart_wallet: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [WalletState::PREFIX_SEED, smart_wallet.key().as_ref()],
        bump,
    )]
    pub wallet_state: Box<Account<'info, WalletState>>,

    #[account(
        mut,
        constraint = destination.key() != smart_wallet.key() @ GuardedWalletError::SelfTransfer,
    )]
    /// CHECK: Receives `value` lamports, never deserialized.
    pub destination: UncheckedAccount<'info>,

    /// CHECK: Target of the CPI, validated to be executable.
    pub cpi_program: Option<UncheckedAccount<'info>>,

    pub system_program: Program<'info, System>,
}
