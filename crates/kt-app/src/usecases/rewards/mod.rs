mod claim_coupon;
mod context;
mod grant_points;
mod overview;

pub use claim_coupon::{ClaimCoupon, ClaimCouponError};
pub use context::RewardsContext;
pub use grant_points::GrantPoints;
pub use overview::{GetRewardsOverview, RewardsOverview};
