//! Persisted projection of the application state.
//!
//! Only the whole preferences slice and the debug mode flag are durable.
//! Startup, identification and debug data are volatile.

use serde::{Deserialize, Serialize};

use crate::preferences::PreferencesState;
use crate::store::AppState;

/// Storage key of the preferences slice.
pub const PREFERENCES_KEY: &str = "persist:preferences";
/// Storage key of the debug slice whitelist.
pub const DEBUG_KEY: &str = "persist:debug";

/// Whitelisted part of the debug slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedDebug {
    pub is_debug_mode_enabled: bool,
}

/// Durable subset of [`AppState`]. `None` means "absent in storage".
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PersistedState {
    pub preferences: Option<PreferencesState>,
    pub debug: Option<PersistedDebug>,
}

impl PersistedState {
    /// Project the durable part of a committed state.
    pub fn from_state(state: &AppState) -> Self {
        Self {
            preferences: Some(state.preferences.clone()),
            debug: Some(PersistedDebug {
                is_debug_mode_enabled: state.debug.is_debug_mode_enabled,
            }),
        }
    }

    /// Merge persisted values into an initial state. Absent values keep the
    /// initial ones.
    pub fn rehydrate(self, mut state: AppState) -> AppState {
        if let Some(preferences) = self.preferences {
            state.preferences = preferences;
        }
        if let Some(debug) = self.debug {
            state.debug.is_debug_mode_enabled = debug.is_debug_mode_enabled;
        }
        state
    }
}

/// Encode a persisted entry.
pub fn encode<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string(value)
}

/// Decode a persisted entry; undecodable data is treated as absent.
pub fn decode<T: for<'de> Deserialize<'de>>(key: &str, raw: Option<String>) -> Option<T> {
    let raw = raw?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(_err) => {
            #[cfg(feature = "tracing")]
            tracing::warn!(key, error = %_err, "discarding undecodable persisted entry");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::debug::DebugAction;
    use crate::preferences::PreferencesAction;
    use crate::startup::{StartupAction, StartupStatus};
    use crate::store::{reduce, Action};
    use serde_json::json;

    #[test]
    fn projection_skips_volatile_slices() {
        let state = [
            Action::Startup(StartupAction::SetStatus(StartupStatus::WaitOnboarding)),
            Action::Preferences(PreferencesAction::SetOnboardingDone),
            Action::Debug(DebugAction::SetModeEnabled(false)),
            Action::Debug(DebugAction::SetData(
                serde_json::from_value(json!({"k": "v"})).unwrap(),
            )),
        ]
        .iter()
        .fold(AppState::default(), |s, a| reduce(&s, a));

        let persisted = PersistedState::from_state(&state);
        let restored = persisted.rehydrate(AppState::default());

        assert_eq!(restored.preferences, state.preferences);
        assert!(!restored.debug.is_debug_mode_enabled);
        assert!(restored.debug.debug_data.is_empty());
        assert_eq!(restored.startup.status, StartupStatus::NotStarted);
    }

    #[test]
    fn absent_entries_keep_initial_values() {
        let initial = AppState::default();
        let restored = PersistedState::default().rehydrate(initial.clone());
        assert_eq!(restored, initial);
    }

    #[test]
    fn corrupt_entries_decode_as_absent() {
        let decoded: Option<PersistedDebug> = decode(DEBUG_KEY, Some("{not json".to_string()));
        assert!(decoded.is_none());

        let decoded: Option<PersistedDebug> = decode(
            DEBUG_KEY,
            Some(r#"{"isDebugModeEnabled":false}"#.to_string()),
        );
        assert_eq!(
            decoded,
            Some(PersistedDebug {
                is_debug_mode_enabled: false
            })
        );
    }

    #[test]
    fn empty_session_id_decodes_as_absent() {
        let raw = r#"{"sessionId":"","isOnboardingComplete":true,"isBiometricEnabled":true}"#;
        let persisted = PersistedState {
            preferences: decode(PREFERENCES_KEY, Some(raw.to_string())),
            debug: None,
        };
        assert!(persisted.preferences.is_none());

        let restored = persisted.rehydrate(AppState::default());
        assert!(!restored.preferences.session_id.as_str().is_empty());
        assert!(!restored.preferences.is_onboarding_complete);
    }
}
