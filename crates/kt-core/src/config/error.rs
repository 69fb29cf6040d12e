use crate::catalog::CatalogError;
use crate::ids::CouponId;
use crate::onboarding::FlowError;
use crate::pricing::PricingError;

/// Errors raised while turning configuration into domain values.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid category table: {0}")]
    Pricing(#[from] PricingError),

    #[error("invalid catalog: {0}")]
    Catalog(#[from] CatalogError),

    #[error("invalid onboarding flow: {0}")]
    Onboarding(#[from] FlowError),

    #[error("coupon {id} is listed more than once")]
    DuplicateCoupon { id: CouponId },

    #[error("account claims coupon {id}, which is not offered")]
    UnknownClaimedCoupon { id: CouponId },
}
