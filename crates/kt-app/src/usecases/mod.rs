pub mod onboarding;
pub mod pricing;
pub mod rewards;

pub use onboarding::{OnboardingError, OnboardingOrchestrator, OnboardingProgress};
pub use pricing::{QuoteCatalog, QuoteError};
pub use rewards::{
    ClaimCoupon, ClaimCouponError, GetRewardsOverview, GrantPoints, RewardsContext,
    RewardsOverview,
};
