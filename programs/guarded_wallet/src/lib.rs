use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod security;
pub mod state;
pub mod utils;

use instructions::*;
use state::*;

declare_id!("2qYgcVckpCXhHLzCGzxJvmV8btW4Kw9YywuFpZyt2w3K");

/// Smart wallet guarded by a rolling spending limit and guardian-driven recovery
#[program]
pub mod guarded_wallet {
    use super::*;

    /// Create the global config with the deployer as authority
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize(ctx)
    }

    pub fn update_config(
        ctx: Context<UpdateConfig>,
        param: UpdateConfigType,
        value: u64,
    ) -> Result<()> {
        instructions::update_config(ctx, param, value)
    }

    /// Create a smart wallet PDA and its policy state
    pub fn create_smart_wallet(
        ctx: Context<CreateSmartWallet>,
        args: CreateSmartWalletArgs,
    ) -> Result<()> {
        instructions::create_smart_wallet(ctx, args)
    }

    /// Send lamports and optionally call a program from the smart wallet,
    /// charged against the spending limit
    pub fn execute<'c: 'info, 'info>(
        ctx: Context<'_, '_, 'c, 'info, Execute<'info>>,
        args: ExecuteArgs,
    ) -> Result<()> {
        instructions::execute(ctx, args)
    }

    // Spend limit

    pub fn enable_spend_limit(ctx: Context<ConfigureSpendLimit>) -> Result<()> {
        instructions::enable_spend_limit(ctx)
    }

    pub fn set_spending_limit(ctx: Context<ConfigureSpendLimit>, amount: u64) -> Result<()> {
        instructions::set_spending_limit(ctx, amount)
    }

    pub fn remove_spending_limit(ctx: Context<ConfigureSpendLimit>) -> Result<()> {
        instructions::remove_spending_limit(ctx)
    }

    pub fn get_limit(ctx: Context<ReadWalletState>) -> Result<u64> {
        instructions::get_limit(ctx)
    }

    pub fn get_limit_info(ctx: Context<ReadWalletState>) -> Result<SpendLimit> {
        instructions::get_limit_info(ctx)
    }

    // Social recovery

    pub fn set_guardian(ctx: Context<ManageRecovery>, guardian: Pubkey) -> Result<()> {
        instructions::set_guardian(ctx, guardian)
    }

    pub fn set_recovery_confirmation_time(
        ctx: Context<ManageRecovery>,
        duration: u64,
    ) -> Result<()> {
        instructions::set_recovery_confirmation_time(ctx, duration)
    }

    /// Guardian proposes a new owner; executable once the confirmation time has passed
    pub fn init_recovery(ctx: Context<ManageRecovery>, new_owner: Pubkey) -> Result<()> {
        instructions::init_recovery(ctx, new_owner)
    }

    pub fn cancel_recovery(ctx: Context<ManageRecovery>) -> Result<()> {
        instructions::cancel_recovery(ctx)
    }

    pub fn execute_recovery(ctx: Context<ManageRecovery>) -> Result<()> {
        instructions::execute_recovery(ctx)
    }

    pub fn get_recovery_request(ctx: Context<ReadWalletState>) -> Result<RecoveryRequest> {
        instructions::get_recovery_request(ctx)
    }

    // Signature validation

    /// Check an Ed25519-verified signature of `hash` against the current owner
    pub fn is_valid_signature(
        ctx: Context<IsValidSignature>,
        hash: [u8; 32],
        signature: [u8; 64],
        verify_instruction_index: u8,
    ) -> Result<[u8; 4]> {
        instructions::is_valid_signature(ctx, hash, signature, verify_instruction_index)
    }

    pub fn supports_interface(
        ctx: Context<SupportsInterface>,
        interface_id: [u8; 4],
    ) -> Result<bool> {
        instructions::supports_interface(ctx, interface_id)
    }
}
