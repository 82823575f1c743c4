use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::{debug, warn};

use crate::store::kv::{KvStore, StoreError};

/// File-backed key-value store: each key lives in `<base_dir>/<key>.json`.
pub struct JsonFileStore {
    base_dir: PathBuf,
}

impl JsonFileStore {
    pub fn with_base_dir(base_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn file_path(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{key}.json"))
    }

    fn write_atomic(&self, key: &str, value: &str) -> std::io::Result<()> {
        let path = self.file_path(key);
        let tmp_path = path.with_extension("json.tmp");

        let mut file = fs::File::create(&tmp_path)?;
        file.write_all(value.as_bytes())?;
        file.sync_all()?;

        if let Err(e) = fs::rename(&tmp_path, &path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e);
        }
        Ok(())
    }
}

pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("termfolio")
}

fn valid_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

impl KvStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        if !valid_key(key) {
            return None;
        }
        let path = self.file_path(key);
        if !path.exists() {
            return None;
        }
        match fs::read_to_string(&path) {
            Ok(content) => Some(content),
            Err(e) => {
                warn!(key, error = %e, "failed to read stored value");
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if !valid_key(key) {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        self.write_atomic(key, value).map_err(|source| StoreError::Io {
            key: key.to_string(),
            source,
        })?;
        debug!(key, bytes = value.len(), "stored value");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn make_test_store() -> (TempDir, JsonFileStore) {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::with_base_dir(dir.path().to_path_buf()).unwrap();
        (dir, store)
    }

    #[test]
    fn test_get_missing_key() {
        let (_dir, store) = make_test_store();
        assert_eq!(store.get("typingScores"), None);
    }

    #[test]
    fn test_set_then_get() {
        let (_dir, mut store) = make_test_store();
        store.set("typingScores", "[]").unwrap();
        assert_eq!(store.get("typingScores").as_deref(), Some("[]"));
        assert!(store.file_path("typingScores").exists());
    }

    #[test]
    fn test_set_leaves_no_tmp_files() {
        let (dir, mut store) = make_test_store();
        store.set("typingScores", "[1]").unwrap();
        store.set("typingScores", "[1,2]").unwrap();

        let tmp_files: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().extension().and_then(|x| x.to_str()) == Some("tmp"))
            .collect();
        assert!(tmp_files.is_empty(), "no residual .tmp files");
        assert_eq!(store.get("typingScores").as_deref(), Some("[1,2]"));
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let (_dir, mut store) = make_test_store();
        let err = store.set("../escape", "x").unwrap_err();
        assert!(matches!(err, StoreError::InvalidKey(_)));
        assert_eq!(store.get("../escape"), None);
    }

    #[test]
    fn test_set_into_missing_dir_fails() {
        let dir = TempDir::new().unwrap();
        let mut store = JsonFileStore {
            base_dir: dir.path().join("nonexistent_subdir"),
        };
        let err = store.set("typingScores", "[]").unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
        assert!(err.to_string().contains("typingScores"));
    }
}
