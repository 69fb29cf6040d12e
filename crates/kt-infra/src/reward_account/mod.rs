//! Reward account repositories.

mod file;
mod in_memory;

pub use file::{FileRewardAccountRepository, DEFAULT_REWARD_ACCOUNT_FILE};
pub use in_memory::InMemoryRewardAccountRepository;
