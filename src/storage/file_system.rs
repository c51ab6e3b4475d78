use std::fs;
use std::path::PathBuf;

use super::KeyValue;
use crate::error::StorageError;

/// File-backed key-value store, one file per key under a base directory.
///
/// Stands in for the browser's `localStorage`; values are stored verbatim
/// (they are already JSON documents).
pub struct FileStore {
    base_path: PathBuf,
}

impl FileStore {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        // Keys like "demo.connectedBanks" are already safe file names
        self.base_path.join(format!("{}.json", key))
    }
}

impl KeyValue for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.entry_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(path)?;
        Ok(Some(contents))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.base_path)?;
        fs::write(self.entry_path(key), value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.entry_path(key);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn persists_across_instances() {
        let dir = TempDir::new().unwrap();

        let store = FileStore::new(dir.path());
        store.set("demo.wallet", r#"{"balance":5}"#).unwrap();

        let reopened = FileStore::new(dir.path());
        assert_eq!(
            reopened.get("demo.wallet").unwrap().as_deref(),
            Some(r#"{"balance":5}"#)
        );

        reopened.remove("demo.wallet").unwrap();
        assert_eq!(store.get("demo.wallet").unwrap(), None);
    }

    #[test]
    fn missing_key_is_none() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path());
        assert_eq!(store.get("demo.wallet").unwrap(), None);
        // removing a missing key is fine
        store.remove("demo.wallet").unwrap();
    }
}
