use std::fs;
use std::io;
use std::path::PathBuf;

use ws_core::ports::{encode_storage_key, SecureStorageError, SecureStoragePort};

/// File-based secure storage for development or headless environments.
///
/// 基于文件的安全存储（开发/无桌面环境回退）。
#[derive(Clone)]
pub struct FileSecureStorage {
    base_dir: PathBuf,
}

impl FileSecureStorage {
    /// Create file secure storage rooted at `<app_data_root>/secure`.
    pub fn new_in_app_data_root(app_data_root: PathBuf) -> Result<Self, io::Error> {
        let base_dir = app_data_root.join("secure");
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    fn file_path(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{}.bin", encode_storage_key(key)))
    }

    fn map_io_error(context: &str, err: io::Error) -> SecureStorageError {
        SecureStorageError::Other(format!("{context}: {err}"))
    }
}

impl SecureStoragePort for FileSecureStorage {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, SecureStorageError> {
        match fs::read(self.file_path(key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(Self::map_io_error(
                "failed to read secure storage file",
                err,
            )),
        }
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), SecureStorageError> {
        let path = self.file_path(key);
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, value)
            .map_err(|err| Self::map_io_error("failed to write secure storage temp file", err))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&temp_path, fs::Permissions::from_mode(0o600)).map_err(|err| {
                Self::map_io_error("failed to set secure storage permissions", err)
            })?;
        }

        fs::rename(&temp_path, &path)
            .map_err(|err| Self::map_io_error("failed to rename secure storage file", err))?;
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), SecureStorageError> {
        match fs::remove_file(self.file_path(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(Self::map_io_error(
                "failed to delete secure storage file",
                err,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_returns_none() {
        let temp_dir = tempfile::TempDir::new().expect("temp dir");
        let storage = FileSecureStorage::with_base_dir(temp_dir.path().to_path_buf());
        assert!(storage.get("identification:pin").expect("get").is_none());
    }

    #[test]
    fn delete_removes_value_and_is_idempotent() {
        let temp_dir = tempfile::TempDir::new().expect("temp dir");
        let storage = FileSecureStorage::new_in_app_data_root(temp_dir.path().to_path_buf())
            .expect("storage");
        storage.set("identification:pin", b"135792").expect("set");
        assert_eq!(
            storage.get("identification:pin").expect("get"),
            Some(b"135792".to_vec())
        );

        storage.delete("identification:pin").expect("delete");
        storage.delete("identification:pin").expect("delete again");
        assert!(storage.get("identification:pin").expect("get").is_none());
    }

    #[test]
    fn keys_differing_only_in_punctuation_do_not_collide() {
        let temp_dir = tempfile::TempDir::new().expect("temp dir");
        let storage = FileSecureStorage::with_base_dir(temp_dir.path().to_path_buf());
        storage.set("identification:pin", b"colon").expect("set");
        storage.set("identification_pin", b"underscore").expect("set");

        assert_eq!(
            storage.get("identification:pin").expect("get"),
            Some(b"colon".to_vec())
        );
        assert_eq!(
            storage.get("identification_pin").expect("get"),
            Some(b"underscore".to_vec())
        );
    }

    #[cfg(unix)]
    #[test]
    fn stored_files_are_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = tempfile::TempDir::new().expect("temp dir");
        let storage = FileSecureStorage::with_base_dir(temp_dir.path().to_path_buf());
        storage.set("secret", b"x").expect("set");

        let mode = fs::metadata(temp_dir.path().join("secret.bin"))
            .expect("metadata")
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
