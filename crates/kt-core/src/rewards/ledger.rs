//! Coupon claim guards and the single claim transition.
//!
//! Per coupon and account the lifecycle is `Unclaimed -> Claimed`, and
//! `Claimed` is terminal. [`RewardLedger::can_claim`] is the guard and
//! [`RewardLedger::claim`] the only operation that fires the transition.

use std::fmt::{Display, Formatter};

use serde::Serialize;
#[cfg(feature = "tracing")]
use tracing::debug;

use super::{ClaimError, Coupon, RewardAccount};
use crate::ids::CouponId;

/// What the rider can do with a coupon right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum CouponStatus {
    Claimed,
    Claimable { points: u64 },
    Locked { shortfall: u64 },
}

impl CouponStatus {
    pub fn is_claimed(&self) -> bool {
        matches!(self, CouponStatus::Claimed)
    }
}

impl Display for CouponStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CouponStatus::Claimed => f.write_str("Claimed"),
            CouponStatus::Claimable { points } => write!(f, "+{points} pts"),
            CouponStatus::Locked { .. } => f.write_str("Locked"),
        }
    }
}

/// A coupon paired with its status for one account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CouponView {
    pub coupon: Coupon,
    pub status: CouponStatus,
}

/// Outcome of a successful claim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClaimReceipt {
    pub coupon_id: CouponId,
    pub points_awarded: u64,
    pub account: RewardAccount,
}

impl ClaimReceipt {
    /// Confirmation text naming the exact points awarded.
    pub fn confirmation(&self) -> String {
        format!("You earned {} points.", self.points_awarded)
    }
}

/// Stateless claim rules over a [`RewardAccount`] snapshot.
pub struct RewardLedger;

impl RewardLedger {
    /// True iff the coupon is unclaimed and the calorie gate is met.
    pub fn can_claim(coupon: &Coupon, account: &RewardAccount) -> bool {
        Self::check(coupon, account).is_ok()
    }

    pub fn status(coupon: &Coupon, account: &RewardAccount) -> CouponStatus {
        match Self::check(coupon, account) {
            Ok(()) => CouponStatus::Claimable {
                points: coupon.points,
            },
            Err(ClaimError::AlreadyClaimed { .. }) => CouponStatus::Claimed,
            Err(ClaimError::InsufficientCalories { shortfall, .. }) => {
                CouponStatus::Locked { shortfall }
            }
        }
    }

    pub fn view(coupon: &Coupon, account: &RewardAccount) -> CouponView {
        CouponView {
            coupon: coupon.clone(),
            status: Self::status(coupon, account),
        }
    }

    /// Claim `coupon` against `account`.
    ///
    /// On success the returned account has the coupon in its claimed set and
    /// `coupon.points` more points. Calories are left untouched. On failure
    /// the input account is not modified.
    pub fn claim(coupon: &Coupon, account: &RewardAccount) -> Result<ClaimReceipt, ClaimError> {
        if let Err(err) = Self::check(coupon, account) {
            #[cfg(feature = "tracing")]
            debug!(coupon_id = %coupon.id, error = %err, "coupon claim refused");
            return Err(err);
        }

        let account = account.clone().record_claim(coupon.id, coupon.points);
        #[cfg(feature = "tracing")]
        debug!(
            coupon_id = %coupon.id,
            points_awarded = coupon.points,
            points = account.points(),
            "coupon claimed"
        );
        Ok(ClaimReceipt {
            coupon_id: coupon.id,
            points_awarded: coupon.points,
            account,
        })
    }

    // Already-claimed wins over the calorie gate.
    fn check(coupon: &Coupon, account: &RewardAccount) -> Result<(), ClaimError> {
        if account.has_claimed(coupon.id) {
            return Err(ClaimError::AlreadyClaimed {
                coupon_id: coupon.id,
            });
        }
        if account.calories() < coupon.calorie_cost {
            return Err(ClaimError::InsufficientCalories {
                coupon_id: coupon.id,
                shortfall: coupon.calorie_cost - account.calories(),
            });
        }
        Ok(())
    }
}
