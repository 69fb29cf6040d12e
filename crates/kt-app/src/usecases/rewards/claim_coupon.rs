use std::sync::Arc;

use tracing::{debug, info, info_span, warn, Instrument};

use kt_core::ids::CouponId;
use kt_core::rewards::{ClaimError, ClaimReceipt, RewardLedger};

use super::context::MAX_SWAP_ATTEMPTS;
use super::RewardsContext;

#[derive(Debug, thiserror::Error)]
pub enum ClaimCouponError {
    #[error("coupon {id} is not offered")]
    CouponNotFound { id: CouponId },
    /// The ledger refused the claim. An expected outcome of user action.
    #[error(transparent)]
    Rejected(#[from] ClaimError),
    #[error("reward account kept changing during claim")]
    Contended,
    #[error("reward account storage failed: {0}")]
    Storage(#[source] anyhow::Error),
}

impl ClaimCouponError {
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ClaimCouponError::Rejected(_))
    }
}

/// Use case for claiming a reward coupon.
///
/// Claims are serialized through [`RewardsContext`] and stored with a
/// compare-and-swap, so a second attempt on the same coupon sees the first's
/// claimed set and fails with [`ClaimError::AlreadyClaimed`] instead of
/// awarding points twice.
///
/// Calories come from the activity tracker on every call. The stored figure
/// is only the last reading seen and never gates a claim.
pub struct ClaimCoupon {
    context: Arc<RewardsContext>,
}

impl ClaimCoupon {
    pub fn new(context: Arc<RewardsContext>) -> Self {
        Self { context }
    }

    pub async fn execute(
        &self,
        coupon_id: CouponId,
        calories: u64,
    ) -> Result<ClaimReceipt, ClaimCouponError> {
        let span = info_span!("usecase.claim_coupon.execute", coupon_id = %coupon_id, calories);
        async {
            let coupon = self
                .context
                .coupons()
                .get(coupon_id)
                .cloned()
                .ok_or(ClaimCouponError::CouponNotFound { id: coupon_id })?;

            let _write_guard = self.context.acquire_write_lock().await;
            let accounts = self.context.accounts();

            for attempt in 1..=MAX_SWAP_ATTEMPTS {
                let current = accounts.load().await.map_err(ClaimCouponError::Storage)?;
                let reading = current.clone().with_calories(calories);
                let receipt = match RewardLedger::claim(&coupon, &reading) {
                    Ok(receipt) => receipt,
                    Err(err) => {
                        debug!(error = %err, "claim rejected");
                        return Err(err.into());
                    }
                };

                let swapped = accounts
                    .compare_and_swap(&current, &receipt.account)
                    .await
                    .map_err(ClaimCouponError::Storage)?;
                if swapped {
                    info!(
                        points_awarded = receipt.points_awarded,
                        points = receipt.account.points(),
                        "coupon claimed"
                    );
                    return Ok(receipt);
                }
                warn!(attempt, "reward account changed underneath claim, retrying");
            }

            Err(ClaimCouponError::Contended)
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use kt_core::ports::RewardAccountPort;
    use kt_core::rewards::{Coupon, CouponBook, RewardAccount};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    struct MockRewardAccountPort {
        account: Mutex<RewardAccount>,
        /// Swaps to refuse before accepting, simulating an outside writer.
        refuse_swaps: AtomicUsize,
    }

    impl MockRewardAccountPort {
        fn new(account: RewardAccount) -> Self {
            Self {
                account: Mutex::new(account),
                refuse_swaps: AtomicUsize::new(0),
            }
        }

        fn refusing(account: RewardAccount, refuse_swaps: usize) -> Self {
            Self {
                account: Mutex::new(account),
                refuse_swaps: AtomicUsize::new(refuse_swaps),
            }
        }
    }

    #[async_trait]
    impl RewardAccountPort for MockRewardAccountPort {
        async fn load(&self) -> anyhow::Result<RewardAccount> {
            Ok(self.account.lock().unwrap().clone())
        }

        async fn compare_and_swap(
            &self,
            expected: &RewardAccount,
            next: &RewardAccount,
        ) -> anyhow::Result<bool> {
            if self
                .refuse_swaps
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
                .is_ok()
            {
                return Ok(false);
            }
            let mut current = self.account.lock().unwrap();
            if *current != *expected {
                return Ok(false);
            }
            *current = next.clone();
            Ok(true)
        }
    }

    struct FailingRewardAccountPort;

    #[async_trait]
    impl RewardAccountPort for FailingRewardAccountPort {
        async fn load(&self) -> anyhow::Result<RewardAccount> {
            Err(anyhow::anyhow!("disk unplugged"))
        }

        async fn compare_and_swap(
            &self,
            _expected: &RewardAccount,
            _next: &RewardAccount,
        ) -> anyhow::Result<bool> {
            Ok(false)
        }
    }

    fn book() -> Arc<CouponBook> {
        Arc::new(
            CouponBook::new(vec![
                Coupon {
                    id: CouponId::new(1),
                    title: "30% Off Metro Pass".to_string(),
                    calorie_cost: 250,
                    expires: "Dec 31".to_string(),
                    points: 50,
                },
                Coupon {
                    id: CouponId::new(4),
                    title: "Walking Tour Voucher".to_string(),
                    calorie_cost: 400,
                    expires: "Jan 10".to_string(),
                    points: 100,
                },
            ])
            .unwrap(),
        )
    }

    fn use_case(port: Arc<dyn RewardAccountPort>) -> ClaimCoupon {
        ClaimCoupon::new(RewardsContext::new(port, book()).arc())
    }

    #[tokio::test]
    async fn test_execute_claims_and_stores_account() {
        let port = Arc::new(MockRewardAccountPort::new(RewardAccount::new(180, 1250)));
        let claim = use_case(port.clone());

        let receipt = claim.execute(CouponId::new(1), 1250).await.unwrap();

        assert_eq!(receipt.points_awarded, 50);
        let stored = port.load().await.unwrap();
        assert_eq!(stored.points(), 230);
        assert!(stored.has_claimed(CouponId::new(1)));
    }

    #[tokio::test]
    async fn test_execute_twice_fails_with_already_claimed() {
        let port = Arc::new(MockRewardAccountPort::new(RewardAccount::new(180, 1250)));
        let claim = use_case(port.clone());

        claim.execute(CouponId::new(1), 1250).await.unwrap();
        let err = claim.execute(CouponId::new(1), 1250).await.unwrap_err();

        assert!(matches!(
            err,
            ClaimCouponError::Rejected(ClaimError::AlreadyClaimed { .. })
        ));
        assert!(err.is_recoverable());
        assert_eq!(port.load().await.unwrap().points(), 230);
    }

    #[tokio::test]
    async fn test_execute_insufficient_calories_leaves_account() {
        let initial = RewardAccount::new(180, 300);
        let port = Arc::new(MockRewardAccountPort::new(initial.clone()));

        let err = use_case(port.clone())
            .execute(CouponId::new(4), 300)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ClaimCouponError::Rejected(ClaimError::InsufficientCalories { shortfall: 100, .. })
        ));
        assert_eq!(port.load().await.unwrap(), initial);
    }

    #[tokio::test]
    async fn test_execute_unknown_coupon() {
        let port = Arc::new(MockRewardAccountPort::new(RewardAccount::new(0, 0)));
        let err = use_case(port).execute(CouponId::new(77), 0).await.unwrap_err();
        assert!(matches!(err, ClaimCouponError::CouponNotFound { id } if id == CouponId::new(77)));
    }

    #[tokio::test]
    async fn test_execute_retries_after_lost_swap() {
        let port = Arc::new(MockRewardAccountPort::refusing(
            RewardAccount::new(0, 1250),
            MAX_SWAP_ATTEMPTS - 1,
        ));

        let receipt = use_case(port).execute(CouponId::new(1), 1250).await.unwrap();
        assert_eq!(receipt.account.points(), 50);
    }

    #[tokio::test]
    async fn test_execute_gives_up_when_always_contended() {
        let port = Arc::new(MockRewardAccountPort::refusing(
            RewardAccount::new(0, 1250),
            MAX_SWAP_ATTEMPTS,
        ));

        let err = use_case(port.clone())
            .execute(CouponId::new(1), 1250)
            .await
            .unwrap_err();
        assert!(matches!(err, ClaimCouponError::Contended));
        assert!(!err.is_recoverable());
        assert_eq!(port.load().await.unwrap().points(), 0);
    }

    #[tokio::test]
    async fn test_execute_surfaces_storage_failure() {
        let err = use_case(Arc::new(FailingRewardAccountPort))
            .execute(CouponId::new(1), 1250)
            .await
            .unwrap_err();
        assert!(matches!(err, ClaimCouponError::Storage(_)));
    }

    #[tokio::test]
    async fn test_execute_uses_caller_calories_over_stored_reading() {
        // Stored reading is stale: 300 would lock the 400-calorie voucher.
        let port = Arc::new(MockRewardAccountPort::new(RewardAccount::new(180, 300)));
        let claim = use_case(port.clone());

        let receipt = claim.execute(CouponId::new(4), 1250).await.unwrap();

        assert_eq!(receipt.points_awarded, 100);
        let stored = port.load().await.unwrap();
        assert_eq!(stored.points(), 280);
        assert_eq!(stored.calories(), 1250);
    }

    #[tokio::test]
    async fn test_execute_lower_reading_locks_despite_stored_calories() {
        let port = Arc::new(MockRewardAccountPort::new(RewardAccount::new(180, 1250)));

        let err = use_case(port.clone())
            .execute(CouponId::new(4), 350)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ClaimCouponError::Rejected(ClaimError::InsufficientCalories { shortfall: 50, .. })
        ));
        assert_eq!(port.load().await.unwrap().points(), 180);
    }
}
