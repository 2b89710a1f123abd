use anchor_lang::prelude::*;

/// Pending owner replacement created by the guardian.
///
/// A default `new_owner` means no request is pending.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace)]
pub struct RecoveryRequest {
    pub new_owner: Pubkey,
    pub requested_at: i64,
}

impl RecoveryRequest {
    pub fn is_pending(&self) -> bool {
        self.new_owner != Pubkey::default()
    }

    /// Earliest timestamp at which the request may be executed
    pub fn matures_at(&self, confirmation_time: i64) -> i64 {
        self.requested_at.saturating_add(confirmation_time)
    }

    pub fn is_mature(&self, now: i64, confirmation_time: i64) -> bool {
        now >= self.matures_at(confirmation_time)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_not_pending() {
        assert!(!RecoveryRequest::default().is_pending());
    }

    #[test]
    fn maturity_boundary_is_inclusive() {
        let request = RecoveryRequest {
            new_owner: Pubkey::new_unique(),
            requested_at: 100,
        };
        assert!(!request.is_mature(109, 10));
        assert!(request.is_mature(110, 10));
        assert!(request.is_mature(111, 10));
    }

    #[test]
    fn clear_resets_request() {
        let mut request = RecoveryRequest {
            new_owner: Pubkey::new_unique(),
            requested_at: 7,
        };
        request.clear();
        assert_eq!(request, RecoveryRequest::default());
    }

    #[test]
    fn matures_at_saturates() {
        let request = RecoveryRequest {
            new_owner: Pubkey::new_unique(),
            requested_at: i64::MAX - 1,
        };
        assert_eq!(request.matures_at(10), i64::MAX);
    }
}
