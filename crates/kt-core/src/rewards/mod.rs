//! Rewards domain module.
//!
//! Coupons are unlocked by a cumulative calorie figure and, once claimed,
//! award loyalty points. `RewardLedger` is the single place the claim guards
//! live; callers pass a [`RewardAccount`] in and receive the updated one back.

mod account;
mod coupon;
mod error;
mod ledger;

pub use account::RewardAccount;
pub use coupon::{Coupon, CouponBook};
pub use error::ClaimError;
pub use ledger::{ClaimReceipt, CouponStatus, CouponView, RewardLedger};
