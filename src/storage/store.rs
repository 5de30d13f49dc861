//! Configuration store with file-based JSON persistence
//!
//! All module configurations live in a single document:
//! ```text
//! ~/.coursekit/
//! └── configurations.json    — { "<module-id>": { ... }, ... }
//! ```
//! Writes stay in memory until an explicit [`ConfigStore::save`].

use crate::error::{Error, Result};
use crate::storage::ConfigValue;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Key-value store mapping module identity to configuration objects
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Current configuration for a module; `None` if never configured
    async fn configuration(&self, module_id: &str) -> Result<Option<ConfigValue>>;

    /// Stage a configuration for a module
    async fn set_configuration(&self, module_id: &str, config: ConfigValue) -> Result<()>;

    /// Commit all staged configurations
    async fn save(&self) -> Result<()>;
}

/// In-memory configuration store backed by a JSON document
pub struct FileConfigStore {
    path: PathBuf,
    entries: Arc<RwLock<BTreeMap<String, ConfigValue>>>,
}

impl FileConfigStore {
    /// Create a store at the given base directory, loading any persisted
    /// configurations
    pub async fn new(base_dir: PathBuf) -> std::io::Result<Self> {
        tokio::fs::create_dir_all(&base_dir).await?;
        let path = base_dir.join("configurations.json");
        let entries = Self::load_from_disk(&path).await;

        Ok(Self {
            path,
            entries: Arc::new(RwLock::new(entries)),
        })
    }

    /// Default base directory (~/.coursekit/)
    pub fn default_dir() -> PathBuf {
        dirs_next::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".coursekit")
    }

    async fn load_from_disk(path: &Path) -> BTreeMap<String, ConfigValue> {
        let data = match tokio::fs::read_to_string(path).await {
            Ok(data) => data,
            Err(_) => return BTreeMap::new(),
        };

        match serde_json::from_str(&data) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(
                    "Failed to parse configuration store {}: {}",
                    path.display(),
                    e
                );
                BTreeMap::new()
            }
        }
    }
}

#[async_trait]
impl ConfigStore for FileConfigStore {
    async fn configuration(&self, module_id: &str) -> Result<Option<ConfigValue>> {
        let entries = self.entries.read().await;
        Ok(entries.get(module_id).cloned())
    }

    async fn set_configuration(&self, module_id: &str, config: ConfigValue) -> Result<()> {
        let mut entries = self.entries.write().await;
        entries.insert(module_id.to_string(), config);
        Ok(())
    }

    async fn save(&self) -> Result<()> {
        let snapshot = {
            let entries = self.entries.read().await;
            serde_json::to_string_pretty(&*entries)
                .map_err(|e| Error::StoreCommit(e.to_string()))?
        };

        // Write-then-rename keeps the document intact if the write dies
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, snapshot)
            .await
            .map_err(|e| Error::StoreCommit(e.to_string()))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| Error::StoreCommit(e.to_string()))?;

        tracing::debug!("Committed configuration store to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileConfigStore::new(dir.path().to_path_buf()).await.unwrap();
        assert!(store.configuration("access").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_set_is_visible_before_save() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileConfigStore::new(dir.path().to_path_buf()).await.unwrap();

        store
            .set_configuration("access", json!({"allowAnonymous": true}))
            .await
            .unwrap();

        let config = store.configuration("access").await.unwrap().unwrap();
        assert_eq!(config["allowAnonymous"], json!(true));
    }

    #[tokio::test]
    async fn test_save_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        {
            let store = FileConfigStore::new(dir.path().to_path_buf()).await.unwrap();
            store
                .set_configuration("scoring", json!({"passThreshold": 80}))
                .await
                .unwrap();
            store.save().await.unwrap();
        }

        let reopened = FileConfigStore::new(dir.path().to_path_buf()).await.unwrap();
        let config = reopened.configuration("scoring").await.unwrap().unwrap();
        assert_eq!(config["passThreshold"], json!(80));
    }

    #[tokio::test]
    async fn test_unsaved_changes_are_discarded() {
        let dir = tempfile::tempdir().unwrap();
        {
            let store = FileConfigStore::new(dir.path().to_path_buf()).await.unwrap();
            store
                .set_configuration("feedback", json!({"showSolutions": true}))
                .await
                .unwrap();
            // no save
        }

        let reopened = FileConfigStore::new(dir.path().to_path_buf()).await.unwrap();
        assert!(reopened.configuration("feedback").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_corrupt_document_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        tokio::fs::write(dir.path().join("configurations.json"), "{ not json")
            .await
            .unwrap();

        let store = FileConfigStore::new(dir.path().to_path_buf()).await.unwrap();
        assert!(store.configuration("access").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_overwrites_previous_document() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileConfigStore::new(dir.path().to_path_buf()).await.unwrap();

        store
            .set_configuration("access", json!({"accessCode": "a"}))
            .await
            .unwrap();
        store.save().await.unwrap();

        store
            .set_configuration("access", json!({"accessCode": "b"}))
            .await
            .unwrap();
        store.save().await.unwrap();

        let reopened = FileConfigStore::new(dir.path().to_path_buf()).await.unwrap();
        let config = reopened.configuration("access").await.unwrap().unwrap();
        assert_eq!(config["accessCode"], json!("b"));
    }
}
