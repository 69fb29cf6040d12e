//! # kt-infra
//!
//! Adapters for the `kt-core` ports: in-memory and JSON-file storage for the
//! reward account.

pub mod reward_account;

pub use reward_account::{FileRewardAccountRepository, InMemoryRewardAccountRepository};
