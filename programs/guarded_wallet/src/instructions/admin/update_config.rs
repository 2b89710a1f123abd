use anchor_lang::prelude::*;

use crate::{
    error::GuardedWalletError,
    events::ConfigUpdated,
    security::validation,
    state::{Config, UpdateConfigType},
};

pub fn update_config(
    ctx: Context<UpdateConfig>,
    param: UpdateConfigType,
    value: u64,
) -> Result<()> {
    let config = &mut ctx.accounts.config;

    let (old_value, new_value) = match param {
        UpdateConfigType::SpendWindow => {
            let window =
                validation::validate_duration(value, false, GuardedWalletError::InvalidSpendWindow)?;
            let old = config.default_spend_window;
            config.default_spend_window = window;
            (old.to_string(), window.to_string())
        }
        UpdateConfigType::RecoveryConfirmationTime => {
            let delay = validation::validate_duration(
                value,
                true,
                GuardedWalletError::InvalidRecoveryConfirmationTime,
            )?;
            let old = config.default_recovery_confirmation_time;
            config.default_recovery_confirmation_time = delay;
            (old.to_string(), delay.to_string())
        }
        UpdateConfigType::Admin => {
            let new_admin_info = ctx
                .remaining_accounts
                .first()
                .ok_or(GuardedWalletError::InvalidRemainingAccounts)?;
            let old = config.authority;
            config.authority = new_admin_info.key();
            (old.to_string(), config.authority.to_string())
        }
        UpdateConfigType::PauseProgram | UpdateConfigType::UnpauseProgram => {
            let old = config.is_paused;
            config.is_paused = matches!(param, UpdateConfigType::PauseProgram);
            (old.to_string(), config.is_paused.to_string())
        }
    };

    msg!("Config {:?}: {} -> {}", param, old_value, new_value);
    emit!(ConfigUpdated {
        authority: ctx.accounts.authority.key(),
        update_type: format!("{:?}", param),
        old_value,
        new_value,
        timestamp: Clock::get()?.unix_timestamp,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    /// The current authority of the program.
    #[account(mut)]
    pub authority: Signer<'info>,

    /// The program's configuration account.
    #[account(
        mut,
        seeds = [Config::PREFIX_SEED],
        bump,
        has_one = authority @ GuardedWalletError::UnauthorizedAdmin
    )]
    pub config: Box<Account<'info, Config>>,
}
