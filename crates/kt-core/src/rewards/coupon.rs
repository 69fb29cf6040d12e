use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, CouponConfig};
use crate::ids::CouponId;

/// A reward coupon.
///
/// Whether it has been claimed is owned by [`RewardAccount`](super::RewardAccount);
/// see [`RewardLedger::status`](super::RewardLedger::status).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coupon {
    pub id: CouponId,
    pub title: String,
    /// Calories the account must have accumulated. Not debited on claim.
    pub calorie_cost: u64,
    pub expires: String,
    /// Loyalty points awarded on claim.
    pub points: u64,
}

impl From<&CouponConfig> for Coupon {
    fn from(config: &CouponConfig) -> Self {
        Self {
            id: CouponId::new(config.id),
            title: config.title.clone(),
            calorie_cost: config.calories,
            expires: config.expires.clone(),
            points: config.points,
        }
    }
}

/// The static list of offered coupons, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CouponBook {
    coupons: Vec<Coupon>,
}

impl CouponBook {
    pub fn new(coupons: Vec<Coupon>) -> Result<Self, ConfigError> {
        for (pos, coupon) in coupons.iter().enumerate() {
            if coupons[..pos].iter().any(|other| other.id == coupon.id) {
                return Err(ConfigError::DuplicateCoupon { id: coupon.id });
            }
        }
        Ok(Self { coupons })
    }

    pub fn from_config(configs: &[CouponConfig]) -> Result<Self, ConfigError> {
        Self::new(configs.iter().map(Coupon::from).collect())
    }

    pub fn get(&self, id: CouponId) -> Option<&Coupon> {
        self.coupons.iter().find(|coupon| coupon.id == id)
    }

    pub fn contains(&self, id: CouponId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Coupon> {
        self.coupons.iter()
    }

    pub fn len(&self) -> usize {
        self.coupons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coupons.is_empty()
    }
}
