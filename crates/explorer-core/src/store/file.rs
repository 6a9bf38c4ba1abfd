//! File-backed persistence store.

use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use super::{PersistenceStore, StoreError, StoreResult};

/// Key-value store persisted as a single JSON object on disk.
///
/// The whole file is loaded on [`open`](Self::open) and rewritten on every
/// [`set`](PersistenceStore::set). Writes go to a sibling temporary file that
/// is then renamed over the original, so a crash never leaves a half-written
/// store behind.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: RwLock<BTreeMap<String, String>>,
}

impl FileStore {
    /// Opens the store at `path`.
    ///
    /// A missing file is treated as an empty store; it is created on the
    /// first write.
    ///
    /// # Errors
    ///
    /// * [`StoreError::Io`] - The file exists but cannot be read
    /// * [`StoreError::Corrupt`] - The file is not a JSON object of strings
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();

        let entries = if path.exists() {
            let contents = fs::read_to_string(&path)?;
            serde_json::from_str(&contents)
                .map_err(|e| StoreError::Corrupt(format!("{}: {}", path.display(), e)))?
        } else {
            tracing::debug!(?path, "Store file not found, starting empty");
            BTreeMap::new()
        };

        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    /// Returns the path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling of the store file with `.tmp` appended to the full file name.
    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("store"));
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn write_to_disk(&self, entries: &BTreeMap<String, String>) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(entries)?;
        let tmp = self.temp_path();

        if let Err(e) = fs::write(&tmp, contents).and_then(|()| fs::rename(&tmp, &self.path)) {
            if let Err(cleanup) = fs::remove_file(&tmp) {
                tracing::debug!(?tmp, error = %cleanup, "Failed to remove temporary store file");
            }
            return Err(e.into());
        }

        tracing::debug!(path = ?self.path, "Wrote store file");
        Ok(())
    }
}

impl PersistenceStore for FileStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut entries = self.entries.write();

        let mut next = entries.clone();
        next.insert(key.to_string(), value.to_string());
        self.write_to_disk(&next)?;

        *entries = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(dir.path().join("storage.json")).unwrap();

        assert_eq!(store.get("anything").unwrap(), None);
        assert!(!store.path().exists());
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("storage.json");

        {
            let store = FileStore::open(&path).unwrap();
            store.set("@App:Key", "[1,2,3]").unwrap();
            store.set("other", "value").unwrap();
        }

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("@App:Key").unwrap().as_deref(), Some("[1,2,3]"));
        assert_eq!(reopened.get("other").unwrap().as_deref(), Some("value"));
        assert!(!dir.path().join("nested").join("storage.json.tmp").exists());
    }

    #[test]
    fn test_corrupt_file_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, "not json at all").unwrap();

        let err = FileStore::open(&path).unwrap_err();
        assert!(matches!(err, StoreError::Corrupt(_)));
    }

    #[test]
    fn test_failed_write_keeps_previous_value() {
        let dir = TempDir::new().unwrap();
        // A directory where the file should be makes the rename fail.
        let path = dir.path().join("storage.json");
        let store = FileStore::open(&path).unwrap();
        fs::create_dir_all(&path).unwrap();

        assert!(store.set("key", "value").is_err());
        assert_eq!(store.get("key").unwrap(), None);
        assert!(!dir.path().join("storage.json.tmp").exists());
    }

    #[test]
    fn test_sibling_stores_with_same_stem_do_not_share_temp_file() {
        let dir = TempDir::new().unwrap();
        let first = FileStore::open(dir.path().join("bookmarks.db")).unwrap();
        let second = FileStore::open(dir.path().join("bookmarks.txt")).unwrap();

        assert_ne!(first.temp_path(), second.temp_path());
        assert_eq!(first.temp_path(), dir.path().join("bookmarks.db.tmp"));

        first.set("key", "one").unwrap();
        second.set("key", "two").unwrap();

        assert_eq!(
            FileStore::open(first.path()).unwrap().get("key").unwrap().as_deref(),
            Some("one")
        );
        assert_eq!(
            FileStore::open(second.path()).unwrap().get("key").unwrap().as_deref(),
            Some("two")
        );
    }
}
