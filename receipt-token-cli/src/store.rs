//! JSON file backed key-value store for parking profiles

use receipt_token_core::{KvStore, MemoryStore, ProfileError};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// [`KvStore`] persisted as a single JSON object on disk
///
/// Every mutation rewrites the whole file.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    inner: MemoryStore,
}

impl FileStore {
    /// Open the store at `path`; a missing file is an empty store
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, ProfileError> {
        let path = path.as_ref().to_path_buf();

        let inner = if path.exists() {
            let content = fs::read_to_string(&path)
                .map_err(|e| ProfileError::Store(format!("{}: {}", path.display(), e)))?;
            let entries: BTreeMap<String, Value> = serde_json::from_str(&content)
                .map_err(|e| ProfileError::Store(format!("{}: {}", path.display(), e)))?;
            debug!("Loaded {} entries from {}", entries.len(), path.display());
            MemoryStore::from_entries(entries)
        } else {
            debug!("{} does not exist, starting empty", path.display());
            MemoryStore::new()
        };

        Ok(Self { path, inner })
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<(), ProfileError> {
        let json = serde_json::to_string_pretty(self.inner.entries())
            .map_err(|e| ProfileError::Store(e.to_string()))?;
        fs::write(&self.path, json)
            .map_err(|e| ProfileError::Store(format!("{}: {}", self.path.display(), e)))
    }
}

impl KvStore for FileStore {
    fn get_by_prefix(&self, prefix: &str) -> Result<Vec<(String, Value)>, ProfileError> {
        self.inner.get_by_prefix(prefix)
    }

    fn get(&self, key: &str) -> Result<Option<Value>, ProfileError> {
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: Value) -> Result<(), ProfileError> {
        self.inner.set(key, value)?;
        self.save()
    }

    fn del(&mut self, key: &str) -> Result<bool, ProfileError> {
        let existed = self.inner.del(key)?;
        if existed {
            self.save()?;
        }
        Ok(existed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_empty() {
        let td = tempdir().unwrap();
        let store = FileStore::open(td.path().join("none.json")).unwrap();
        assert!(store.get_by_prefix("").unwrap().is_empty());
    }

    #[test]
    fn test_set_persists_across_open() {
        let td = tempdir().unwrap();
        let path = td.path().join("profiles.json");

        let mut store = FileStore::open(&path).unwrap();
        store.set("parking_profile:1", json!({"name": "A"})).unwrap();
        drop(store);

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(
            reopened.get("parking_profile:1").unwrap(),
            Some(json!({"name": "A"}))
        );
    }

    #[test]
    fn test_corrupt_file_is_a_store_error() {
        let td = tempdir().unwrap();
        let path = td.path().join("profiles.json");
        fs::write(&path, "{ nope").unwrap();

        assert!(matches!(FileStore::open(&path), Err(ProfileError::Store(_))));
    }
}
