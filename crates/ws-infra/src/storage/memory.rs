use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use ws_core::ports::{KeyValueStorageError, KeyValueStoragePort};

/// Volatile key-value storage, for tests and ephemeral sessions.
#[derive(Default)]
pub struct InMemoryKeyValueStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemoryKeyValueStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-filled with `entries`.
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: RwLock::new(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl KeyValueStoragePort for InMemoryKeyValueStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, KeyValueStorageError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn put(&self, key: &str, value: &str) -> Result<(), KeyValueStorageError> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), KeyValueStorageError> {
        self.entries.write().await.remove(key);
        Ok(())
    }
}
