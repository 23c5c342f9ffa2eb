//! Key-value storage port
//!
//! A string-to-string store with the same contract as browser local
//! storage: one value per key, whole-value overwrites, no merging.

use async_trait::async_trait;

#[async_trait]
pub trait KeyValueStorePort: Send + Sync {
    /// Read the value stored under `key`, `None` if absent.
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>>;

    /// Overwrite the value stored under `key`. Last writer wins.
    async fn set(&self, key: &str, value: &str) -> anyhow::Result<()>;

    /// Remove `key`. Removing an absent key is not an error.
    async fn remove(&self, key: &str) -> anyhow::Result<()>;
}
