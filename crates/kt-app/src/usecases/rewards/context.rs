use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};

use kt_core::ports::RewardAccountPort;
use kt_core::rewards::CouponBook;

/// How many times a write re-reads the account after losing a swap.
pub(crate) const MAX_SWAP_ATTEMPTS: usize = 3;

/// Shared rewards context: the account port, the coupon list and the write lock.
///
/// Every use case that changes the account acquires `write_lock` for the whole
/// load → decide → store sequence, so a double tap dispatching two claims runs
/// them one after the other.
#[derive(Clone)]
pub struct RewardsContext {
    accounts: Arc<dyn RewardAccountPort>,
    coupons: Arc<CouponBook>,
    write_lock: Arc<Mutex<()>>,
}

impl RewardsContext {
    pub fn new(accounts: Arc<dyn RewardAccountPort>, coupons: Arc<CouponBook>) -> Self {
        Self {
            accounts,
            coupons,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Returns the context wrapped in Arc for shared ownership.
    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub fn accounts(&self) -> &Arc<dyn RewardAccountPort> {
        &self.accounts
    }

    pub fn coupons(&self) -> &CouponBook {
        &self.coupons
    }

    pub async fn acquire_write_lock(&self) -> MutexGuard<'_, ()> {
        self.write_lock.lock().await
    }
}
