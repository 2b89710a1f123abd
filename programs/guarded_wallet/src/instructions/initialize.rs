use anchor_lang::prelude::*;

use crate::events::ProgramInitialized;
use crate::state::Config;

pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
    let config = &mut ctx.accounts.config;
    config.set_inner(Config::new(ctx.accounts.signer.key()));

    emit!(ProgramInitialized {
        authority: config.authority,
        default_spend_window: config.default_spend_window,
        default_recovery_confirmation_time: config.default_recovery_confirmation_time,
        timestamp: Clock::get()?.unix_timestamp,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        init,
        payer = signer,
        space = 8 + Config::INIT_SPACE,
        seeds = [Config::PREFIX_SEED],
        bump
    )]
    pub config: Box<Account<'info, Config>>,

    pub system_program: Program<'info, System>,
}
