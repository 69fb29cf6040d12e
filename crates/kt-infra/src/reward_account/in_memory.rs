use std::sync::Mutex;

use async_trait::async_trait;
use kt_core::ports::RewardAccountPort;
use kt_core::rewards::RewardAccount;

/// Process-local account store. The mutex makes compare-and-swap atomic.
pub struct InMemoryRewardAccountRepository {
    account: Mutex<RewardAccount>,
}

impl InMemoryRewardAccountRepository {
    pub fn new(initial: RewardAccount) -> Self {
        Self {
            account: Mutex::new(initial),
        }
    }

    fn lock(&self) -> anyhow::Result<std::sync::MutexGuard<'_, RewardAccount>> {
        self.account
            .lock()
            .map_err(|_| anyhow::anyhow!("reward account lock poisoned"))
    }
}

#[async_trait]
impl RewardAccountPort for InMemoryRewardAccountRepository {
    async fn load(&self) -> anyhow::Result<RewardAccount> {
        Ok(self.lock()?.clone())
    }

    async fn compare_and_swap(
        &self,
        expected: &RewardAccount,
        next: &RewardAccount,
    ) -> anyhow::Result<bool> {
        let mut current = self.lock()?;
        if *current != *expected {
            return Ok(false);
        }
        *current = next.clone();
        Ok(true)
    }
}
