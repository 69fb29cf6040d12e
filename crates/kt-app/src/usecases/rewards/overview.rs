use std::sync::Arc;

use serde::Serialize;

use kt_core::rewards::{CouponView, RewardAccount, RewardLedger};

use super::RewardsContext;

/// Account snapshot plus every coupon with its current status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RewardsOverview {
    pub account: RewardAccount,
    pub coupons: Vec<CouponView>,
}

/// Use case for rendering the rewards card against the tracker's current
/// calorie reading.
pub struct GetRewardsOverview {
    context: Arc<RewardsContext>,
}

impl GetRewardsOverview {
    pub fn new(context: Arc<RewardsContext>) -> Self {
        Self { context }
    }

    pub async fn execute(&self, calories: u64) -> anyhow::Result<RewardsOverview> {
        let account = self
            .context
            .accounts()
            .load()
            .await?
            .with_calories(calories);
        let coupons = self
            .context
            .coupons()
            .iter()
            .map(|coupon| RewardLedger::view(coupon, &account))
            .collect();
        Ok(RewardsOverview { account, coupons })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kt_core::config::EngineConfig;
    use kt_core::ids::CouponId;
    use kt_core::rewards::{CouponBook, CouponStatus};
    use kt_infra::InMemoryRewardAccountRepository;

    #[tokio::test]
    async fn test_execute_reports_status_per_coupon() {
        let config = EngineConfig::default();
        let book = CouponBook::from_config(&config.coupons).unwrap();
        // The stored reading is stale; the caller's 300 decides the statuses.
        let account = RewardAccount::new(180, 1250).with_claimed([CouponId::new(3)]);
        let context = RewardsContext::new(
            Arc::new(InMemoryRewardAccountRepository::new(account)),
            Arc::new(book),
        )
        .arc();

        let overview = GetRewardsOverview::new(context).execute(300).await.unwrap();

        let statuses: Vec<_> = overview.coupons.iter().map(|view| view.status).collect();
        assert_eq!(
            statuses,
            vec![
                CouponStatus::Claimable { points: 50 },
                CouponStatus::Claimable { points: 30 },
                CouponStatus::Claimed,
                CouponStatus::Locked { shortfall: 100 },
            ]
        );
        assert_eq!(overview.account.points(), 180);
        assert_eq!(overview.account.calories(), 300);
    }
}
