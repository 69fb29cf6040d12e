//! ID type wrappers for type safety.
//!
//! Catalog items and coupons are keyed by the small integer ids the static
//! data is authored with.

mod id_macro;

use serde::{Deserialize, Serialize};

use id_macro::impl_numeric_id;

/// Identifies a listed catalog item (a hotel, a bus service).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(u32);

/// Identifies a reward coupon. Claims are keyed by this id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CouponId(u32);

impl_numeric_id!(ItemId, CouponId);
