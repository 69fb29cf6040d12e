use std::sync::Arc;

use tracing::info;

use kt_core::rewards::RewardAccount;

use super::context::MAX_SWAP_ATTEMPTS;
use super::RewardsContext;

/// Use case for an explicit external points grant (promotions, support).
pub struct GrantPoints {
    context: Arc<RewardsContext>,
}

impl GrantPoints {
    pub fn new(context: Arc<RewardsContext>) -> Self {
        Self { context }
    }

    pub async fn execute(&self, points: u64) -> anyhow::Result<RewardAccount> {
        let _write_guard = self.context.acquire_write_lock().await;
        let accounts = self.context.accounts();
        for _ in 0..MAX_SWAP_ATTEMPTS {
            let current = accounts.load().await?;
            let next = current.clone().grant_points(points);
            if accounts.compare_and_swap(&current, &next).await? {
                info!(points, total = next.points(), "points granted");
                return Ok(next);
            }
        }
        anyhow::bail!("reward account kept changing during points grant")
    }
}
