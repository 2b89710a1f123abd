use anchor_lang::prelude::*;

use super::{RecoveryRequest, SpendLimit};
use crate::constants::{INVALID_SIGNATURE, MAGIC_VALUE};
use crate::error::GuardedWalletError;

/// Everything a guarded wallet owns.
///
/// Policy operations take the caller and the current time explicitly so the
/// instruction handlers stay thin wrappers around `Clock` and `Signer`.
#[account]
#[derive(Debug, InitSpace)]
pub struct WalletState {
    /// Wallet id used in the smart wallet PDA seeds
    pub id: u64,
    /// Bump of the smart wallet PDA
    pub bump: u8,
    pub owner: Pubkey,
    /// Trusted relayer allowed to call `execute` next to the owner
    pub entry_point: Pubkey,
    /// Only principal allowed to start a recovery; default when unset
    pub guardian: Pubkey,
    /// Seconds between `init_recovery` and the earliest `execute_recovery`
    pub recovery_confirmation_time: i64,
    /// Length of one spending window in seconds, fixed at creation
    pub spend_window: i64,
    pub limit: SpendLimit,
    pub recovery: RecoveryRequest,
}

impl WalletState {
    pub const PREFIX_SEED: &'static [u8] = b"wallet_state";

    // === Authorization gate ===

    pub fn require_owner(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.owner, GuardedWalletError::NotOwner);
        Ok(())
    }

    pub fn require_from_entry_point_or_owner(&self, caller: &Pubkey) -> Result<()> {
        require!(
            *caller == self.entry_point || *caller == self.owner,
            GuardedWalletError::NotEntryPointOrOwner
        );
        Ok(())
    }

    pub fn require_guardian(&self, caller: &Pubkey) -> Result<()> {
        require!(
            self.guardian != Pubkey::default() && *caller == self.guardian,
            GuardedWalletError::NotGuardian
        );
        Ok(())
    }

    pub fn require_owner_or_guardian(&self, caller: &Pubkey) -> Result<()> {
        let is_guardian = self.guardian != Pubkey::default() && *caller == self.guardian;
        require!(
            *caller == self.owner || is_guardian,
            GuardedWalletError::NotOwnerOrGuardian
        );
        Ok(())
    }

    // === Spend limit ===

    pub fn enable_spend_limit(&mut self, caller: &Pubkey) -> Result<()> {
        self.require_owner(caller)?;
        self.limit.enable();
        Ok(())
    }

    pub fn set_spending_limit(&mut self, caller: &Pubkey, amount: u64, now: i64) -> Result<()> {
        self.require_owner(caller)?;
        self.limit.set(amount, now, self.spend_window)
    }

    pub fn remove_spending_limit(&mut self, caller: &Pubkey, now: i64) -> Result<()> {
        self.require_owner(caller)?;
        self.limit.remove(now)
    }

    /// Gate an outgoing transfer of `value` lamports and debit it from the window
    pub fn authorize_execute(&mut self, caller: &Pubkey, value: u64, now: i64) -> Result<()> {
        self.require_from_entry_point_or_owner(caller)?;
        self.limit.check(value, now, self.spend_window)
    }

    // === Social recovery ===

    pub fn set_guardian(&mut self, caller: &Pubkey, guardian: Pubkey) -> Result<()> {
        self.require_owner(caller)?;
        self.guardian = guardian;
        Ok(())
    }

    pub fn set_recovery_confirmation_time(&mut self, caller: &Pubkey, duration: i64) -> Result<()> {
        self.require_owner(caller)?;
        require!(
            duration >= 0,
            GuardedWalletError::InvalidRecoveryConfirmationTime
        );
        self.recovery_confirmation_time = duration;
        Ok(())
    }

    /// Start (or replace) the pending recovery. The latest request wins.
    pub fn init_recovery(&mut self, caller: &Pubkey, new_owner: Pubkey, now: i64) -> Result<()> {
        self.require_guardian(caller)?;
        require!(
            new_owner != Pubkey::default(),
            GuardedWalletError::InvalidNewOwner
        );

        if self.recovery.is_pending() {
            msg!(
                "Replacing pending recovery to {} with {}",
                self.recovery.new_owner,
                new_owner
            );
        }
        self.recovery = RecoveryRequest {
            new_owner,
            requested_at: now,
        };
        Ok(())
    }

    pub fn cancel_recovery(&mut self, caller: &Pubkey) -> Result<()> {
        self.require_owner(caller)?;
        require!(
            self.recovery.is_pending(),
            GuardedWalletError::NoPendingRecovery
        );
        self.recovery.clear();
        Ok(())
    }

    /// Hand the wallet to the pending candidate. Returns the previous owner.
    pub fn execute_recovery(&mut self, caller: &Pubkey, now: i64) -> Result<Pubkey> {
        self.require_owner_or_guardian(caller)?;
        require!(
            self.recovery.is_pending(),
            GuardedWalletError::NoPendingRecovery
        );
        require!(
            self.recovery
                .is_mature(now, self.recovery_confirmation_time),
            GuardedWalletError::RecoveryDelayNotElapsed
        );

        let previous_owner = self.owner;
        self.owner = self.recovery.new_owner;
        self.recovery.clear();

        msg!("Owner recovered: {} -> {}", previous_owner, self.owner);
        Ok(previous_owner)
    }

    // === Signature validation ===

    /// Sentinel for a signer recovered from a verified signature
    pub fn signature_status(&self, signer: Option<Pubkey>) -> [u8; 4] {
        match signer {
            Some(signer) if signer == self.owner => MAGIC_VALUE,
            _ => INVALID_SIGNATURE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    const WINDOW: i64 = 300;

    struct Actors {
        owner: Pubkey,
        entry_point: Pubkey,
        guardian: Pubkey,
        stranger: Pubkey,
    }

    fn setup() -> (WalletState, Actors) {
        let actors = Actors {
            owner: Pubkey::new_unique(),
            entry_point: Pubkey::new_unique(),
            guardian: Pubkey::new_unique(),
            stranger: Pubkey::new_unique(),
        };
        let wallet = WalletState {
            id: 1,
            bump: 255,
            owner: actors.owner,
            entry_point: actors.entry_point,
            guardian: actors.guardian,
            recovery_confirmation_time: 1,
            spend_window: WINDOW,
            limit: SpendLimit::default(),
            recovery: RecoveryRequest::default(),
        };
        (wallet, actors)
    }

    fn code(err: anchor_lang::error::Error) -> u32 {
        match err {
            anchor_lang::error::Error::AnchorError(e) => e.error_code_number,
            anchor_lang::error::Error::ProgramError(e) => panic!("unexpected program error: {e:?}"),
        }
    }

    #[test]
    fn execute_gate_admits_entry_point_and_owner() {
        let (mut wallet, a) = setup();
        wallet.authorize_execute(&a.owner, 10, 0).unwrap();
        wallet.authorize_execute(&a.entry_point, 10, 0).unwrap();

        let err = wallet.authorize_execute(&a.guardian, 10, 0).unwrap_err();
        assert_eq!(ErrorKind::of(&err), Some(ErrorKind::Authorization));
        assert_eq!(code(err), u32::from(GuardedWalletError::NotEntryPointOrOwner));
    }

    #[test]
    fn limit_configuration_is_owner_only() {
        let (mut wallet, a) = setup();
        for caller in [a.entry_point, a.guardian, a.stranger] {
            assert_eq!(
                code(wallet.enable_spend_limit(&caller).unwrap_err()),
                u32::from(GuardedWalletError::NotOwner)
            );
        }
        wallet.enable_spend_limit(&a.owner).unwrap();

        for caller in [a.entry_point, a.guardian, a.stranger] {
            assert!(wallet.set_spending_limit(&caller, 100, 0).is_err());
            assert!(wallet.remove_spending_limit(&caller, 0).is_err());
        }
        assert_eq!(wallet.limit.cap, 0);
        assert!(wallet.limit.enabled);
    }

    #[test]
    fn spending_scenario_through_execute() {
        let (mut wallet, a) = setup();
        wallet.enable_spend_limit(&a.owner).unwrap();
        wallet.set_spending_limit(&a.owner, 100, 0).unwrap();

        wallet.authorize_execute(&a.entry_point, 40, 1).unwrap();
        assert_eq!(wallet.limit.available, 60);

        let err = wallet.authorize_execute(&a.owner, 70, 2).unwrap_err();
        assert_eq!(ErrorKind::of(&err), Some(ErrorKind::LimitExceeded));

        wallet.authorize_execute(&a.owner, 60, 3).unwrap();
        assert_eq!(wallet.limit.available, 0);

        // cannot loosen the cap inside the exhausted window
        let err = wallet.set_spending_limit(&a.owner, 200, 4).unwrap_err();
        assert_eq!(ErrorKind::of(&err), Some(ErrorKind::InvalidConfiguration));
        assert!(wallet.remove_spending_limit(&a.owner, WINDOW).is_err());

        wallet.set_spending_limit(&a.owner, 200, WINDOW + 1).unwrap();
        assert_eq!(wallet.limit.cap, 200);
        assert_eq!(wallet.limit.available, 200);
    }

    #[test]
    fn execute_without_limit_is_unbounded() {
        let (mut wallet, a) = setup();
        wallet.authorize_execute(&a.owner, u64::MAX, 0).unwrap();
        assert_eq!(wallet.limit, SpendLimit::default());
    }

    #[test]
    fn only_guardian_initiates_recovery() {
        let (mut wallet, a) = setup();
        let new_owner = Pubkey::new_unique();
        for caller in [a.owner, a.entry_point, a.stranger] {
            let err = wallet.init_recovery(&caller, new_owner, 0).unwrap_err();
            assert_eq!(code(err), u32::from(GuardedWalletError::NotGuardian));
        }
        assert!(!wallet.recovery.is_pending());

        wallet.init_recovery(&a.guardian, new_owner, 5).unwrap();
        assert_eq!(
            wallet.recovery,
            RecoveryRequest {
                new_owner,
                requested_at: 5
            }
        );
    }

    #[test]
    fn unset_guardian_matches_nobody() {
        let (mut wallet, a) = setup();
        wallet.set_guardian(&a.owner, Pubkey::default()).unwrap();
        let err = wallet
            .init_recovery(&Pubkey::default(), Pubkey::new_unique(), 0)
            .unwrap_err();
        assert_eq!(code(err), u32::from(GuardedWalletError::NotGuardian));
        assert!(wallet.require_owner_or_guardian(&Pubkey::default()).is_err());
    }

    #[test]
    fn recovery_rejects_default_new_owner() {
        let (mut wallet, a) = setup();
        let err = wallet
            .init_recovery(&a.guardian, Pubkey::default(), 0)
            .unwrap_err();
        assert_eq!(code(err), u32::from(GuardedWalletError::InvalidNewOwner));
    }

    #[test]
    fn later_request_overwrites_pending_one() {
        let (mut wallet, a) = setup();
        let first = Pubkey::new_unique();
        let second = Pubkey::new_unique();
        wallet.init_recovery(&a.guardian, first, 10).unwrap();
        wallet.init_recovery(&a.guardian, second, 20).unwrap();
        assert_eq!(wallet.recovery.new_owner, second);
        assert_eq!(wallet.recovery.requested_at, 20);
    }

    #[test]
    fn only_owner_cancels_recovery() {
        let (mut wallet, a) = setup();
        wallet
            .init_recovery(&a.guardian, Pubkey::new_unique(), 0)
            .unwrap();

        for caller in [a.guardian, a.entry_point, a.stranger] {
            let err = wallet.cancel_recovery(&caller).unwrap_err();
            assert_eq!(code(err), u32::from(GuardedWalletError::NotOwner));
        }
        assert!(wallet.recovery.is_pending());

        wallet.cancel_recovery(&a.owner).unwrap();
        assert_eq!(wallet.recovery, RecoveryRequest::default());
    }

    #[test]
    fn cancel_without_request_fails() {
        let (mut wallet, a) = setup();
        let err = wallet.cancel_recovery(&a.owner).unwrap_err();
        assert_eq!(ErrorKind::of(&err), Some(ErrorKind::RecoveryState));
        assert_eq!(code(err), u32::from(GuardedWalletError::NoPendingRecovery));
    }

    #[test]
    fn execute_without_request_fails() {
        let (mut wallet, a) = setup();
        let err = wallet.execute_recovery(&a.owner, 1_000).unwrap_err();
        assert_eq!(code(err), u32::from(GuardedWalletError::NoPendingRecovery));
        assert_eq!(wallet.owner, a.owner);
    }

    #[test]
    fn recovery_waits_for_confirmation_time() {
        let t0 = 1_000;
        let delay = 60;
        let new_owner = Pubkey::new_unique();

        for t in t0..t0 + delay {
            let (mut wallet, a) = setup();
            wallet.set_recovery_confirmation_time(&a.owner, delay).unwrap();
            wallet.init_recovery(&a.guardian, new_owner, t0).unwrap();

            let err = wallet.execute_recovery(&a.guardian, t).unwrap_err();
            assert_eq!(code(err), u32::from(GuardedWalletError::RecoveryDelayNotElapsed));
            assert_eq!(wallet.owner, a.owner);
            assert!(wallet.recovery.is_pending());
        }

        for t in [t0 + delay, t0 + delay + 1, t0 + 10 * delay] {
            let (mut wallet, a) = setup();
            wallet.set_recovery_confirmation_time(&a.owner, delay).unwrap();
            wallet.init_recovery(&a.guardian, new_owner, t0).unwrap();

            let previous = wallet.execute_recovery(&a.guardian, t).unwrap();
            assert_eq!(previous, a.owner);
            assert_eq!(wallet.owner, new_owner);
            assert!(!wallet.recovery.is_pending());

            // the request is consumed
            assert!(wallet.execute_recovery(&a.guardian, t).is_err());
        }
    }

    #[test]
    fn one_second_confirmation_boundary() {
        let (mut wallet, a) = setup();
        let new_owner = Pubkey::new_unique();
        let t0 = 50;
        wallet.init_recovery(&a.guardian, new_owner, t0).unwrap();

        assert!(wallet.execute_recovery(&a.owner, t0).is_err());
        wallet.execute_recovery(&a.owner, t0 + 1).unwrap();
        assert_eq!(wallet.owner, new_owner);
        assert_eq!(wallet.recovery, RecoveryRequest::default());
    }

    #[test]
    fn strangers_cannot_execute_recovery() {
        let (mut wallet, a) = setup();
        wallet
            .init_recovery(&a.guardian, Pubkey::new_unique(), 0)
            .unwrap();
        for caller in [a.entry_point, a.stranger] {
            let err = wallet.execute_recovery(&caller, 100).unwrap_err();
            assert_eq!(code(err), u32::from(GuardedWalletError::NotOwnerOrGuardian));
        }
    }

    #[test]
    fn recovered_owner_takes_over_configuration() {
        let (mut wallet, a) = setup();
        let new_owner = Pubkey::new_unique();
        wallet.init_recovery(&a.guardian, new_owner, 0).unwrap();
        wallet.execute_recovery(&a.guardian, 1).unwrap();

        assert!(wallet.enable_spend_limit(&a.owner).is_err());
        wallet.enable_spend_limit(&new_owner).unwrap();
        assert!(wallet.authorize_execute(&a.owner, 0, 2).is_err());
    }

    #[test]
    fn confirmation_time_is_owner_only_and_non_negative() {
        let (mut wallet, a) = setup();
        assert!(wallet.set_recovery_confirmation_time(&a.guardian, 0).is_err());

        let err = wallet.set_recovery_confirmation_time(&a.owner, -1).unwrap_err();
        assert_eq!(
            code(err),
            u32::from(GuardedWalletError::InvalidRecoveryConfirmationTime)
        );

        wallet.set_recovery_confirmation_time(&a.owner, 0).unwrap();
        assert_eq!(wallet.recovery_confirmation_time, 0);
    }

    #[test]
    fn guardian_is_owner_settable() {
        let (mut wallet, a) = setup();
        let next = Pubkey::new_unique();
        assert!(wallet.set_guardian(&a.guardian, next).is_err());
        wallet.set_guardian(&a.owner, next).unwrap();
        assert_eq!(wallet.guardian, next);
        assert!(wallet.require_guardian(&a.guardian).is_err());
        wallet.require_guardian(&next).unwrap();
    }

    #[test]
    fn signature_status_follows_current_owner() {
        let (mut wallet, a) = setup();
        assert_eq!(wallet.signature_status(Some(a.owner)), MAGIC_VALUE);
        assert_eq!(wallet.signature_status(Some(a.guardian)), INVALID_SIGNATURE);
        assert_eq!(wallet.signature_status(None), INVALID_SIGNATURE);

        let new_owner = Pubkey::new_unique();
        wallet.init_recovery(&a.guardian, new_owner, 0).unwrap();
        wallet.execute_recovery(&a.owner, 1).unwrap();

        assert_eq!(wallet.signature_status(Some(a.owner)), INVALID_SIGNATURE);
        assert_eq!(wallet.signature_status(Some(new_owner)), MAGIC_VALUE);
    }

    #[test]
    fn verified_owner_signature_is_accepted() {
        use crate::utils::{recover_ed25519_signer, tests::ed25519_ix};

        let (mut wallet, a) = setup();
        let hash = [0xabu8; 32];
        let owner_sig = [1u8; 64];
        let guardian_sig = [2u8; 64];
        let verify_ix = ed25519_ix(&[
            (a.owner, owner_sig, hash.to_vec()),
            (a.guardian, guardian_sig, hash.to_vec()),
        ]);

        let status = |wallet: &WalletState, sig: &[u8; 64]| {
            wallet.signature_status(recover_ed25519_signer(&verify_ix, &hash, sig))
        };
        assert_eq!(status(&wallet, &owner_sig), MAGIC_VALUE);
        assert_eq!(status(&wallet, &guardian_sig), INVALID_SIGNATURE);
        assert_eq!(status(&wallet, &[3u8; 64]), INVALID_SIGNATURE);

        // same signatures after the guardian hands the wallet to itself
        wallet.init_recovery(&a.guardian, a.guardian, 0).unwrap();
        wallet.execute_recovery(&a.guardian, 1).unwrap();
        assert_eq!(status(&wallet, &owner_sig), INVALID_SIGNATURE);
        assert_eq!(status(&wallet, &guardian_sig), MAGIC_VALUE);
    }
}
