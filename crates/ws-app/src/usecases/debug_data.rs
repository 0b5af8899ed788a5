//! Debug data recording.
//!
//! Writers go through [`DebugDataRecorder`], which drops writes while debug
//! mode is off. The slice itself accepts them either way.

use serde_json::Value;

use ws_core::debug::{truncate_strings, DebugAction, DebugData, DEFAULT_MAX_STRING_LEN};

use crate::store::Store;

pub struct DebugDataRecorder {
    store: Store,
}

impl DebugDataRecorder {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub fn is_enabled(&self) -> bool {
        self.store.select(|state| state.debug.is_debug_mode_enabled)
    }

    /// Enable or disable debug mode. Clears all recorded data.
    pub fn set_enabled(&self, enabled: bool) {
        self.store.dispatch(DebugAction::SetModeEnabled(enabled));
    }

    /// Record one entry. Returns `false` when suppressed.
    pub fn record(&self, key: impl Into<String>, value: Value) -> bool {
        let mut data = DebugData::new();
        data.insert(key.into(), value);
        self.record_many(data)
    }

    /// Merge several entries. Returns `false` when suppressed.
    pub fn record_many(&self, data: DebugData) -> bool {
        if !self.is_enabled() {
            tracing::trace!(keys = data.len(), "debug mode off, dropping debug data");
            return false;
        }
        self.store.dispatch(DebugAction::SetData(data));
        true
    }

    /// Remove entries by key. Returns `false` when suppressed.
    pub fn clear(&self, keys: &[&str]) -> bool {
        if !self.is_enabled() {
            return false;
        }
        self.store.dispatch(DebugAction::ResetData(
            keys.iter().map(|k| k.to_string()).collect(),
        ));
        true
    }

    /// Display copy of the recorded data with long strings truncated.
    pub fn display_data(&self) -> Vec<(String, Value)> {
        self.store.select(|state| {
            state
                .debug
                .debug_data
                .iter()
                .map(|(k, v)| (k.clone(), truncate_strings(v, DEFAULT_MAX_STRING_LEN)))
                .collect()
        })
    }
}
