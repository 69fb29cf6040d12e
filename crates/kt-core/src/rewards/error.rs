use crate::ids::CouponId;

/// Reasons a claim is refused.
///
/// Both are ordinary outcomes of user action, not system failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClaimError {
    #[error("coupon {coupon_id} has already been claimed")]
    AlreadyClaimed { coupon_id: CouponId },

    #[error("need {shortfall} more calories to claim coupon {coupon_id}")]
    InsufficientCalories { coupon_id: CouponId, shortfall: u64 },
}

impl ClaimError {
    pub fn coupon_id(&self) -> CouponId {
        match self {
            ClaimError::AlreadyClaimed { coupon_id }
            | ClaimError::InsufficientCalories { coupon_id, .. } => *coupon_id,
        }
    }

    pub fn is_recoverable(&self) -> bool {
        true
    }
}
