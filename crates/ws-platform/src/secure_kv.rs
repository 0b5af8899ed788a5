//! Key-value storage on top of a secure storage backend.
//!
//! Reads that fail are reported as absent so a locked or broken keychain
//! degrades to a fresh start instead of blocking startup.

use std::sync::Arc;

use async_trait::async_trait;
use ws_core::ports::{
    KeyValueStorageError, KeyValueStoragePort, SecureStorageError, SecureStoragePort,
};

/// Adapts a [`SecureStoragePort`] to the [`KeyValueStoragePort`] contract.
///
/// Backend calls may block (keychain prompts, file IO) and run on the tokio
/// blocking pool.
#[derive(Clone)]
pub struct SecureKeyValueStorage {
    backend: Arc<dyn SecureStoragePort>,
}

impl SecureKeyValueStorage {
    pub fn new(backend: Arc<dyn SecureStoragePort>) -> Self {
        Self { backend }
    }

    async fn blocking<T, F>(&self, f: F) -> Result<T, KeyValueStorageError>
    where
        T: Send + 'static,
        F: FnOnce(&dyn SecureStoragePort) -> Result<T, SecureStorageError> + Send + 'static,
    {
        let backend = self.backend.clone();
        tokio::task::spawn_blocking(move || f(backend.as_ref()))
            .await
            .map_err(|e| KeyValueStorageError::Backend(format!("secure storage task failed: {e}")))?
            .map_err(map_secure_error)
    }
}

fn map_secure_error(err: SecureStorageError) -> KeyValueStorageError {
    match err {
        SecureStorageError::Unavailable(msg) | SecureStorageError::PermissionDenied(msg) => {
            KeyValueStorageError::Backend(msg)
        }
        SecureStorageError::Other(msg) => KeyValueStorageError::Io(msg),
    }
}

#[async_trait]
impl KeyValueStoragePort for SecureKeyValueStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, KeyValueStorageError> {
        let owned = key.to_string();
        let bytes = match self.blocking(move |backend| backend.get(&owned)).await {
            Ok(bytes) => bytes,
            Err(err) => {
                log::warn!("Secure storage read for {key} failed, treating as absent: {err}");
                return Ok(None);
            }
        };

        match bytes.map(String::from_utf8).transpose() {
            Ok(value) => Ok(value),
            Err(err) => {
                log::warn!("Secure storage entry {key} is not UTF-8, treating as absent: {err}");
                Ok(None)
            }
        }
    }

    async fn put(&self, key: &str, value: &str) -> Result<(), KeyValueStorageError> {
        let key = key.to_string();
        let value = value.as_bytes().to_vec();
        self.blocking(move |backend| backend.set(&key, &value)).await
    }

    async fn remove(&self, key: &str) -> Result<(), KeyValueStorageError> {
        let key = key.to_string();
        self.blocking(move |backend| backend.delete(&key)).await
    }
}
