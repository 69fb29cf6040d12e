//! Ports for the reward account the presentation layer may choose to persist.
//!
//! Implementations are provided by the infrastructure layer.

mod reward_account;

pub use reward_account::RewardAccountPort;
