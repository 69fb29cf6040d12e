//! # kt-app
//!
//! Use cases the presentation layer calls: quoting catalog prices, listing and
//! claiming reward coupons, and driving the onboarding flow.

pub mod usecases;

pub use usecases::*;
