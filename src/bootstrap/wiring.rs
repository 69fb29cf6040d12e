//! Dependency wiring.
//!
//! Turns an [`EngineConfig`] into domain values, picks port adapters from the
//! storage section and hands the presentation layer one [`AppUseCases`].

use std::sync::Arc;

use tracing::info;

use kt_app::usecases::{
    ClaimCoupon, GetRewardsOverview, GrantPoints, OnboardingOrchestrator, QuoteCatalog,
    RewardsContext,
};
use kt_core::catalog::Catalog;
use kt_core::config::{ConfigError, EngineConfig};
use kt_core::onboarding::OnboardingFlow;
use kt_core::ports::RewardAccountPort;
use kt_core::pricing::{CategoryTable, PricingCalculator};
use kt_core::rewards::{CouponBook, RewardAccount};
use kt_infra::{FileRewardAccountRepository, InMemoryRewardAccountRepository};

/// Everything the presentation layer calls.
pub struct AppUseCases {
    pub currency_symbol: String,
    pub quote_catalog: QuoteCatalog,
    pub rewards_overview: GetRewardsOverview,
    pub claim_coupon: ClaimCoupon,
    pub grant_points: GrantPoints,
    pub onboarding: OnboardingOrchestrator,
}

fn build_account_port(
    config: &EngineConfig,
    initial: RewardAccount,
) -> Arc<dyn RewardAccountPort> {
    match &config.storage.data_dir {
        Some(dir) => {
            info!(data_dir = %dir.display(), "using file-backed reward account");
            Arc::new(FileRewardAccountRepository::with_defaults(dir, initial))
        }
        None => {
            info!("using in-memory reward account");
            Arc::new(InMemoryRewardAccountRepository::new(initial))
        }
    }
}

/// Validate the configuration and wire the use cases.
pub fn wire_use_cases(config: &EngineConfig) -> anyhow::Result<AppUseCases> {
    let table = CategoryTable::from_config(&config.categories).map_err(ConfigError::from)?;
    let catalog = Catalog::from_config(&config.catalog).map_err(ConfigError::from)?;
    let coupons = CouponBook::from_config(&config.coupons)?;
    let initial = RewardAccount::from_config(&config.account, &config.coupons, &coupons)?;
    let flow = OnboardingFlow::from_config(&config.onboarding).map_err(ConfigError::from)?;

    let accounts = build_account_port(config, initial);
    let rewards = RewardsContext::new(accounts, Arc::new(coupons)).arc();

    Ok(AppUseCases {
        currency_symbol: config.currency_symbol.clone(),
        quote_catalog: QuoteCatalog::new(
            Arc::new(PricingCalculator::new(table)),
            Arc::new(catalog),
        ),
        rewards_overview: GetRewardsOverview::new(rewards.clone()),
        claim_coupon: ClaimCoupon::new(rewards.clone()),
        grant_points: GrantPoints::new(rewards),
        onboarding: OnboardingOrchestrator::new(Arc::new(flow)),
    })
}
