//! File-based reward account repository
//!
//! Persists the account as JSON. Until the first write the configured
//! starting account is served.

use std::path::{Path, PathBuf};

use anyhow::Context;
use async_trait::async_trait;
use kt_core::ports::RewardAccountPort;
use kt_core::rewards::RewardAccount;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::debug;

pub const DEFAULT_REWARD_ACCOUNT_FILE: &str = "reward_account.json";

pub struct FileRewardAccountRepository {
    state_file_path: PathBuf,
    initial: RewardAccount,
    /// Serializes read-compare-write within this process.
    write_lock: Mutex<()>,
}

impl FileRewardAccountRepository {
    /// Create repository with custom file path
    pub fn new(state_file_path: PathBuf, initial: RewardAccount) -> Self {
        Self {
            state_file_path,
            initial,
            write_lock: Mutex::new(()),
        }
    }

    /// Create repository with defaults
    pub fn with_defaults(base_dir: &Path, initial: RewardAccount) -> Self {
        Self::new(base_dir.join(DEFAULT_REWARD_ACCOUNT_FILE), initial)
    }

    pub fn path(&self) -> &Path {
        &self.state_file_path
    }

    async fn read(&self) -> anyhow::Result<RewardAccount> {
        if !fs::try_exists(&self.state_file_path).await? {
            return Ok(self.initial.clone());
        }

        let content = fs::read_to_string(&self.state_file_path)
            .await
            .with_context(|| {
                format!(
                    "Failed to read reward account: {}",
                    self.state_file_path.display()
                )
            })?;

        if content.trim().is_empty() {
            return Ok(self.initial.clone());
        }

        serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse reward account: {}", e))
    }

    async fn write(&self, account: &RewardAccount) -> anyhow::Result<()> {
        if let Some(parent) = self.state_file_path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(account)
            .map_err(|e| anyhow::anyhow!("Failed to serialize reward account: {}", e))?;

        // Write beside the target and rename so readers never see a torn file.
        let tmp_path = self.state_file_path.with_extension("json.tmp");
        let mut file = fs::File::create(&tmp_path)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to create reward account file: {}", e))?;
        file.write_all(json.as_bytes())
            .await
            .map_err(|e| anyhow::anyhow!("Failed to write reward account file: {}", e))?;
        file.sync_all()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to sync reward account file: {}", e))?;
        fs::rename(&tmp_path, &self.state_file_path)
            .await
            .context("Failed to replace reward account file")?;
        Ok(())
    }
}

#[async_trait]
impl RewardAccountPort for FileRewardAccountRepository {
    async fn load(&self) -> anyhow::Result<RewardAccount> {
        self.read().await
    }

    async fn compare_and_swap(
        &self,
        expected: &RewardAccount,
        next: &RewardAccount,
    ) -> anyhow::Result<bool> {
        let _guard = self.write_lock.lock().await;
        let current = self.read().await?;
        if current != *expected {
            debug!(path = %self.state_file_path.display(), "stale reward account write rejected");
            return Ok(false);
        }
        self.write(next).await?;
        Ok(true)
    }
}
