//! Debug slice.
//!
//! Debug mode flag and a bag of opaque debug records keyed by name. Writing
//! while debug mode is off is allowed here; callers are expected to suppress
//! such writes themselves.

mod truncate;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use truncate::{truncate_strings, DEFAULT_MAX_STRING_LEN};

/// Debug records keyed by name.
pub type DebugData = BTreeMap<String, Value>;

/// Debug slice state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebugState {
    pub is_debug_mode_enabled: bool,
    pub debug_data: DebugData,
}

impl Default for DebugState {
    fn default() -> Self {
        Self {
            is_debug_mode_enabled: true,
            debug_data: DebugData::new(),
        }
    }
}

/// Transitions accepted by the debug slice.
///
/// There is no local reset; the slice only resets through the global broadcast.
#[derive(Debug, Clone, PartialEq)]
pub enum DebugAction {
    /// Set the mode and clear all data, even if the mode does not change.
    SetModeEnabled(bool),
    /// Merge records by key, last write wins.
    SetData(DebugData),
    /// Remove the listed keys.
    ResetData(Vec<String>),
}

/// Pure reducer for the debug slice.
pub fn reduce(state: &DebugState, action: &DebugAction) -> DebugState {
    match action {
        DebugAction::SetModeEnabled(enabled) => DebugState {
            is_debug_mode_enabled: *enabled,
            debug_data: DebugData::new(),
        },
        DebugAction::SetData(partial) => {
            let mut debug_data = state.debug_data.clone();
            debug_data.extend(partial.iter().map(|(k, v)| (k.clone(), v.clone())));
            DebugState {
                debug_data,
                ..state.clone()
            }
        }
        DebugAction::ResetData(keys) => DebugState {
            debug_data: state
                .debug_data
                .iter()
                .filter(|(key, _)| !keys.contains(key))
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
            ..state.clone()
        },
    }
}

pub fn select_is_debug_mode_enabled(state: &DebugState) -> bool {
    state.is_debug_mode_enabled
}

pub fn select_debug_data(state: &DebugState) -> &DebugData {
    &state.debug_data
}
