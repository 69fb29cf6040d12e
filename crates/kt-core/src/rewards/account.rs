use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::CouponBook;
use crate::config::{AccountConfig, ConfigError, CouponConfig};
use crate::ids::CouponId;

/// Snapshot of a rider's loyalty state.
///
/// Fields are private so that points only grow through a claim or an explicit
/// grant, and the claimed set only ever gains members.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardAccount {
    points: u64,
    calories: u64,
    claimed: BTreeSet<CouponId>,
}

impl RewardAccount {
    pub fn new(points: u64, calories: u64) -> Self {
        Self {
            points,
            calories,
            claimed: BTreeSet::new(),
        }
    }

    pub fn with_claimed(mut self, claimed: impl IntoIterator<Item = CouponId>) -> Self {
        self.claimed.extend(claimed);
        self
    }

    /// Build the starting account. Coupons listed with `claimed = true` are
    /// folded into the claimed set so flag and set agree from the start.
    pub fn from_config(
        account: &AccountConfig,
        coupons: &[CouponConfig],
        book: &CouponBook,
    ) -> Result<Self, ConfigError> {
        let claimed = account
            .claimed
            .iter()
            .copied()
            .chain(coupons.iter().filter(|c| c.claimed).map(|c| c.id))
            .map(CouponId::new)
            .collect::<BTreeSet<_>>();
        if let Some(id) = claimed.iter().find(|id| !book.contains(**id)) {
            return Err(ConfigError::UnknownClaimedCoupon { id: *id });
        }
        Ok(Self {
            points: account.points,
            calories: account.calories,
            claimed,
        })
    }

    pub fn points(&self) -> u64 {
        self.points
    }

    pub fn calories(&self) -> u64 {
        self.calories
    }

    pub fn claimed(&self) -> &BTreeSet<CouponId> {
        &self.claimed
    }

    pub fn has_claimed(&self, id: CouponId) -> bool {
        self.claimed.contains(&id)
    }

    /// Explicit external grant, outside of any claim.
    pub fn grant_points(mut self, points: u64) -> Self {
        self.points = self.points.saturating_add(points);
        self
    }

    /// Replace the calorie figure with a newer reading from the activity tracker.
    pub fn with_calories(mut self, calories: u64) -> Self {
        self.calories = calories;
        self
    }

    pub(super) fn record_claim(mut self, id: CouponId, points: u64) -> Self {
        self.claimed.insert(id);
        self.points = self.points.saturating_add(points);
        self
    }
}
