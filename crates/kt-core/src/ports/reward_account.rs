//! Reward account port
//!
//! Holds the rider's current [`RewardAccount`] snapshot. Writes are
//! compare-and-swap so that two claims racing on the same coupon cannot both
//! land: the loser observes the winner's claimed set.

use async_trait::async_trait;

use crate::rewards::RewardAccount;

#[async_trait]
pub trait RewardAccountPort: Send + Sync {
    /// Load the current account snapshot.
    async fn load(&self) -> anyhow::Result<RewardAccount>;

    /// Store `next` only if the stored account still equals `expected`.
    ///
    /// Returns `false` without writing when the stored value has moved on.
    async fn compare_and_swap(
        &self,
        expected: &RewardAccount,
        next: &RewardAccount,
    ) -> anyhow::Result<bool>;
}
