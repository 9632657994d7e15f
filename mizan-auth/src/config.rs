use std::path::Path;

use anyhow::{Context, Result};
use tracing::warn;

use crate::grants::AccessPolicy;

/// Policy-file loading and management functionality
pub struct ConfigManager;

impl ConfigManager {
    /// Load the access policy from a YAML file.
    ///
    /// A missing file falls back to the built-in policy. A file that exists
    /// but cannot be read or parsed is a hard error: a curated policy must
    /// never be silently replaced by defaults.
    pub async fn load_policy(path: impl AsRef<Path>) -> Result<AccessPolicy> {
        let path = path.as_ref();

        if !path.exists() {
            warn!(
                "Access policy not found at {}, using built-in grants",
                path.display()
            );
            return Ok(AccessPolicy::builtin());
        }

        let content = tokio::fs::read_to_string(path)
            .await
            .context("Failed to read access policy")?;

        serde_norway::from_str(&content).context("Failed to parse access policy")
    }

    /// Save the access policy to a YAML file
    pub async fn save_policy(policy: &AccessPolicy, path: impl AsRef<Path>) -> Result<()> {
        let yaml = serde_norway::to_string(policy)?;
        tokio::fs::write(path.as_ref(), yaml)
            .await
            .context("Failed to save access policy")?;
        Ok(())
    }
}
