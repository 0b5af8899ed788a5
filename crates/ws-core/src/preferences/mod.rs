//! Preferences slice.
//!
//! Persisted user preferences. Its reset is the global reset broadcast, see
//! [`crate::store::Broadcast`].

use serde::{Deserialize, Serialize};

use crate::ids::SessionId;

/// Preferences slice state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesState {
    /// Random session id identifying a wallet instance. Regenerated on reset.
    pub session_id: SessionId,
    pub is_onboarding_complete: bool,
    pub is_biometric_enabled: bool,
}

impl PreferencesState {
    /// Initial preferences carrying the given session id.
    pub fn initial(session_id: SessionId) -> Self {
        Self {
            session_id,
            is_onboarding_complete: false,
            is_biometric_enabled: false,
        }
    }
}

impl Default for PreferencesState {
    fn default() -> Self {
        Self::initial(SessionId::generate())
    }
}

/// Transitions accepted by the preferences slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreferencesAction {
    SetOnboardingDone,
    SetBiometricEnabled(bool),
    /// Global reset. The fresh session id travels in the payload so that the
    /// reducer stays pure and replaying the action yields the same state.
    Reset { session_id: SessionId },
}

impl PreferencesAction {
    /// Build a reset action with a freshly generated session id.
    pub fn reset() -> Self {
        Self::Reset {
            session_id: SessionId::generate(),
        }
    }
}

/// Pure reducer for the preferences slice.
pub fn reduce(state: &PreferencesState, action: &PreferencesAction) -> PreferencesState {
    match action {
        PreferencesAction::SetOnboardingDone => PreferencesState {
            is_onboarding_complete: true,
            ..state.clone()
        },
        PreferencesAction::SetBiometricEnabled(enabled) => PreferencesState {
            is_biometric_enabled: *enabled,
            ..state.clone()
        },
        PreferencesAction::Reset { session_id } => PreferencesState::initial(session_id.clone()),
    }
}

pub fn select_is_onboarding_complete(state: &PreferencesState) -> bool {
    state.is_onboarding_complete
}

pub fn select_is_biometric_enabled(state: &PreferencesState) -> bool {
    state.is_biometric_enabled
}

pub fn select_session_id(state: &PreferencesState) -> &SessionId {
    &state.session_id
}
