//! Secure storage selection.

use std::{fs, path::PathBuf, sync::Arc};

use ws_core::ports::SecureStoragePort;

use crate::{
    capability::{detect_storage_capability, SecureStorageCapability},
    file_secure_storage::FileSecureStorage,
    system_secure_storage::SystemSecureStorage,
};

#[derive(Debug, thiserror::Error)]
pub enum SecureStorageFactoryError {
    #[error("secure storage unsupported: {capability:?}")]
    Unsupported { capability: SecureStorageCapability },

    #[error("failed to initialize file-based secure storage: {0}")]
    FileBasedInit(#[from] std::io::Error),
}

fn storage_from_capability(
    capability: SecureStorageCapability,
    app_data_root: PathBuf,
    profile: Option<&str>,
) -> Result<Arc<dyn SecureStoragePort>, SecureStorageFactoryError> {
    match capability {
        SecureStorageCapability::SystemKeyring => {
            Ok(Arc::new(SystemSecureStorage::for_profile(profile)) as Arc<dyn SecureStoragePort>)
        }
        SecureStorageCapability::FileBasedKeystore => {
            fs::create_dir_all(&app_data_root)?;
            let storage = FileSecureStorage::new_in_app_data_root(app_data_root)?;
            Ok(Arc::new(storage) as Arc<dyn SecureStoragePort>)
        }
        SecureStorageCapability::Unsupported => {
            Err(SecureStorageFactoryError::Unsupported { capability })
        }
    }
}

/// Pick the secure storage backend for this machine. Keychain entries are
/// scoped by `profile`; the file fallback lives under `<app_data_root>/secure`.
pub fn create_secure_storage(
    app_data_root: PathBuf,
    profile: Option<&str>,
) -> Result<Arc<dyn SecureStoragePort>, SecureStorageFactoryError> {
    let capability = detect_storage_capability();
    log::debug!("Detected secure storage capability: {:?}", capability);

    match capability {
        SecureStorageCapability::SystemKeyring => log::info!("Using system keyring for secure storage"),
        SecureStorageCapability::FileBasedKeystore => log::info!(
            "Using file-based secure storage under {}",
            app_data_root.display()
        ),
        SecureStorageCapability::Unsupported => {
            log::error!("Secure storage unsupported: {:?}", capability)
        }
    }

    storage_from_capability(capability, app_data_root, profile)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_capability_creates_secure_dir() {
        let temp_dir = tempfile::TempDir::new().expect("temp dir");
        let root = temp_dir.path().join("wallet-shell");

        let storage =
            storage_from_capability(SecureStorageCapability::FileBasedKeystore, root.clone(), None)
                .expect("file storage");
        storage.set("k", b"v").expect("set");

        assert!(root.join("secure").is_dir());
    }

    #[test]
    fn unsupported_capability_is_an_error() {
        let temp_dir = tempfile::TempDir::new().expect("temp dir");
        let result = storage_from_capability(
            SecureStorageCapability::Unsupported,
            temp_dir.path().to_path_buf(),
            None,
        );
        assert!(matches!(
            result,
            Err(SecureStorageFactoryError::Unsupported { .. })
        ));
    }
}
