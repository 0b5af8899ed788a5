//! State persistence.
//!
//! Rehydrates the durable slices before the store is built and writes them
//! back, best effort, after commits. A crash between commit and write loses
//! the pending write; storage is eventually consistent with memory.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{debug, info_span, warn, Instrument};

use ws_core::persistence::{self, PersistedState, DEBUG_KEY, PREFERENCES_KEY};
use ws_core::ports::{KeyValueStorageError, KeyValueStoragePort};
use ws_core::store::AppState;

use crate::store::Store;

#[derive(Clone)]
pub struct StatePersistor {
    storage: Arc<dyn KeyValueStoragePort>,
}

impl StatePersistor {
    pub fn new(storage: Arc<dyn KeyValueStoragePort>) -> Self {
        Self { storage }
    }

    /// Read the persisted state. Read failures degrade to "absent".
    pub async fn rehydrate(&self) -> PersistedState {
        PersistedState {
            preferences: persistence::decode(PREFERENCES_KEY, self.read(PREFERENCES_KEY).await),
            debug: persistence::decode(DEBUG_KEY, self.read(DEBUG_KEY).await),
        }
    }

    async fn read(&self, key: &str) -> Option<String> {
        match self.storage.get(key).await {
            Ok(value) => value,
            Err(err) => {
                warn!(key, error = %err, "persisted entry unreadable, treating as absent");
                None
            }
        }
    }

    /// Write the entries of `current` that differ from `previous`.
    pub async fn flush(
        &self,
        previous: &PersistedState,
        current: &PersistedState,
    ) -> Result<(), KeyValueStorageError> {
        if current.preferences != previous.preferences {
            if let Some(preferences) = &current.preferences {
                self.write(PREFERENCES_KEY, preferences).await?;
            }
        }
        if current.debug != previous.debug {
            if let Some(debug) = &current.debug {
                self.write(DEBUG_KEY, debug).await?;
            }
        }
        Ok(())
    }

    async fn write<T: serde::Serialize>(
        &self,
        key: &str,
        value: &T,
    ) -> Result<(), KeyValueStorageError> {
        let encoded = persistence::encode(value)
            .map_err(|e| KeyValueStorageError::Corrupt(format!("{key}: {e}")))?;
        self.storage.put(key, &encoded).await?;
        debug!(key, "persisted entry written");
        Ok(())
    }

    /// Remove every persisted entry.
    pub async fn purge(&self) -> Result<(), KeyValueStorageError> {
        self.storage.remove(PREFERENCES_KEY).await?;
        self.storage.remove(DEBUG_KEY).await?;
        Ok(())
    }

    /// Follow committed snapshots and write durable changes. The current
    /// snapshot is written right away.
    pub fn spawn(&self, store: &Store) -> JoinHandle<()> {
        let persistor = self.clone();
        let mut receiver = store.subscribe();
        let span = info_span!("usecase.persist_state");

        tokio::spawn(
            async move {
                let mut written = PersistedState::default();
                loop {
                    let snapshot: Arc<AppState> = receiver.borrow_and_update().clone();
                    let current = PersistedState::from_state(&snapshot);
                    match persistor.flush(&written, &current).await {
                        Ok(()) => written = current,
                        Err(err) => warn!(error = %err, "failed to persist state, will retry on next change"),
                    }
                    if receiver.changed().await.is_err() {
                        break;
                    }
                }
            }
            .instrument(span),
        )
    }
}
