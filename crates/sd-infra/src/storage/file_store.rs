//! File-based key-value store
//!
//! Each key is stored as its own JSON file under a root directory, which
//! gives the same one-blob-per-key semantics as browser local storage.

use anyhow::{Context, Result};
use async_trait::async_trait;
use sd_core::ports::KeyValueStorePort;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

pub struct FileKeyValueStore {
    root: PathBuf,
}

impl FileKeyValueStore {
    /// Create a store rooted at `root`. The directory is created on first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// File backing `key`.
    ///
    /// Bytes outside `[A-Za-z0-9._-]` are written as `%XX`, `%` included, so
    /// distinct keys always map to distinct files.
    fn path_for(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty() {
            anyhow::bail!("storage key must not be empty");
        }

        Ok(self.root.join(format!("{}.json", encode_key(key))))
    }

    async fn ensure_root_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.root)
            .await
            .with_context(|| format!("create store dir failed: {}", self.root.display()))
    }

    /// Write to a sibling temp file, then rename over the target.
    ///
    /// Readers see either the previous value or the complete new one.
    async fn atomic_write(&self, path: &Path, content: &str) -> Result<()> {
        self.ensure_root_dir().await?;

        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, content)
            .await
            .with_context(|| format!("write temp value failed: {}", tmp_path.display()))?;

        fs::rename(&tmp_path, path).await.with_context(|| {
            format!(
                "rename temp value to target failed: {} -> {}",
                tmp_path.display(),
                path.display()
            )
        })?;

        Ok(())
    }
}

fn encode_key(key: &str) -> String {
    let mut encoded = String::with_capacity(key.len());
    for byte in key.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'.' | b'-' | b'_') {
            encoded.push(char::from(byte));
        } else {
            encoded.push_str(&format!("%{byte:02X}"));
        }
    }
    encoded
}

#[async_trait]
impl KeyValueStorePort for FileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("read value failed: {}", path.display())),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        self.atomic_write(&path, value).await?;
        debug!(key, path = %path.display(), bytes = value.len(), "value stored");
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path).await {
            Ok(()) => {
                debug!(key, "value removed");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("remove value failed: {}", path.display())),
        }
    }
}
