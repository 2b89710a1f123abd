use anchor_lang::prelude::*;

use crate::error::GuardedWalletError;

/// Native-asset spending limit tracked over a rolling window.
///
/// `available` never exceeds `cap`. Once lamports have been spent in a
/// window the cap can be neither raised nor removed until that window has
/// expired.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace)]
pub struct SpendLimit {
    /// Maximum lamports spendable per window
    pub cap: u64,
    /// Lamports left in the current window
    pub available: u64,
    /// Unix timestamp at which the current window ends
    pub reset_at: i64,
    /// When false `execute` skips the check entirely
    pub enabled: bool,
}

impl SpendLimit {
    /// Turn enforcement on without touching the amounts
    pub fn enable(&mut self) {
        self.enabled = true;
    }

    /// Whether the owner may currently set or remove the limit.
    ///
    /// Only an untouched window (`available == cap`) or an expired one qualifies.
    pub fn is_valid_update(&self, now: i64) -> bool {
        self.enabled && (self.available == self.cap || now > self.reset_at)
    }

    pub fn set(&mut self, amount: u64, now: i64, window: i64) -> Result<()> {
        require!(amount > 0, GuardedWalletError::ZeroSpendingLimit);
        require!(self.enabled, GuardedWalletError::SpendLimitDisabled);
        require!(
            self.is_valid_update(now),
            GuardedWalletError::InvalidLimitUpdate
        );

        self.reset_at = now.saturating_add(window);
        self.cap = amount;
        self.available = amount;
        Ok(())
    }

    pub fn remove(&mut self, now: i64) -> Result<()> {
        require!(self.enabled, GuardedWalletError::SpendLimitDisabled);
        require!(
            self.is_valid_update(now),
            GuardedWalletError::InvalidLimitUpdate
        );

        *self = Self::default();
        Ok(())
    }

    /// Debit `amount` from the current window, rolling it over first if it has expired
    pub fn check(&mut self, amount: u64, now: i64, window: i64) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        if now > self.reset_at {
            self.reset_at = now.saturating_add(window);
            self.available = self.cap;
            msg!("Spend window rolled over, resets at {}", self.reset_at);
        }

        require!(
            self.available >= amount,
            GuardedWalletError::SpendingLimitExceeded
        );

        self.available -= amount;
        Ok(())
    }
}
