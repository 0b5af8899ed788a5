//! File-based key-value storage
//!
//! One file per key under a base directory. Writes go to a temporary file
//! that is then renamed over the target, so a crash leaves either the old or
//! the new value.

use async_trait::async_trait;
use std::io;
use std::path::PathBuf;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use ws_core::ports::{encode_storage_key, KeyValueStorageError, KeyValueStoragePort};

pub const DEFAULT_STORAGE_DIR: &str = "storage";

pub struct FileKeyValueStorage {
    base_dir: PathBuf,
}

impl FileKeyValueStorage {
    /// Create storage rooted at `base_dir`
    pub fn new(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Create storage with defaults under the app data root
    pub fn with_defaults(app_data_root: PathBuf) -> Self {
        Self {
            base_dir: app_data_root.join(DEFAULT_STORAGE_DIR),
        }
    }

    fn file_path(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{}.json", encode_storage_key(key)))
    }

    fn io_error(context: &str, err: io::Error) -> KeyValueStorageError {
        KeyValueStorageError::Io(format!("{context}: {err}"))
    }
}

#[async_trait]
impl KeyValueStoragePort for FileKeyValueStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, KeyValueStorageError> {
        match fs::read_to_string(self.file_path(key)).await {
            Ok(content) if content.trim().is_empty() => Ok(None),
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(Self::io_error("failed to read storage file", err)),
        }
    }

    async fn put(&self, key: &str, value: &str) -> Result<(), KeyValueStorageError> {
        fs::create_dir_all(&self.base_dir)
            .await
            .map_err(|e| Self::io_error("failed to create storage dir", e))?;

        let path = self.file_path(key);
        let temp_path = path.with_extension("tmp");

        let mut file = fs::File::create(&temp_path)
            .await
            .map_err(|e| Self::io_error("failed to create storage temp file", e))?;
        file.write_all(value.as_bytes())
            .await
            .map_err(|e| Self::io_error("failed to write storage temp file", e))?;
        file.sync_all()
            .await
            .map_err(|e| Self::io_error("failed to sync storage temp file", e))?;

        fs::rename(&temp_path, &path)
            .await
            .map_err(|e| Self::io_error("failed to rename storage file", e))?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), KeyValueStorageError> {
        match fs::remove_file(self.file_path(key)).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(Self::io_error("failed to delete storage file", err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_get_returns_none_when_file_not_exists() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileKeyValueStorage::new(temp_dir.path().join("storage"));

        assert!(storage.get("persist:preferences").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_put_then_get() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileKeyValueStorage::with_defaults(temp_dir.path().to_path_buf());

        storage
            .put("persist:debug", r#"{"isDebugModeEnabled":false}"#)
            .await
            .unwrap();

        assert_eq!(
            storage.get("persist:debug").await.unwrap().as_deref(),
            Some(r#"{"isDebugModeEnabled":false}"#)
        );
        assert!(temp_dir
            .path()
            .join("storage")
            .join("persist%3Adebug.json")
            .exists());
    }

    #[tokio::test]
    async fn test_put_overwrites_and_remove_deletes() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileKeyValueStorage::new(temp_dir.path().to_path_buf());

        storage.put("k", "one").await.unwrap();
        storage.put("k", "two").await.unwrap();
        assert_eq!(storage.get("k").await.unwrap().as_deref(), Some("two"));

        storage.remove("k").await.unwrap();
        assert!(storage.get("k").await.unwrap().is_none());

        // Removing twice is fine.
        storage.remove("k").await.unwrap();
    }

    #[tokio::test]
    async fn test_keys_differing_only_in_punctuation_do_not_collide() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileKeyValueStorage::new(temp_dir.path().to_path_buf());

        storage.put("persist:debug", "colon").await.unwrap();
        storage.put("persist_debug", "underscore").await.unwrap();

        assert_eq!(
            storage.get("persist:debug").await.unwrap().as_deref(),
            Some("colon")
        );
        assert_eq!(
            storage.get("persist_debug").await.unwrap().as_deref(),
            Some("underscore")
        );
    }
}
