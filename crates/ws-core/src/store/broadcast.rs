use crate::debug::DebugState;
use crate::identification::IdentificationState;
use crate::ids::SessionId;
use crate::preferences::PreferencesState;
use crate::startup::StartupState;

/// Cross-slice message observed by every slice.
///
/// This is the only coupling between slices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Broadcast {
    /// Return to the initial value. Carries the session id the preferences
    /// slice installs.
    Reset { session_id: SessionId },
}

/// A slice that subscribes to [`Broadcast`] messages.
pub trait Slice: Sized {
    fn on_broadcast(&self, broadcast: &Broadcast) -> Self;
}

impl Slice for StartupState {
    fn on_broadcast(&self, broadcast: &Broadcast) -> Self {
        match broadcast {
            Broadcast::Reset { .. } => StartupState::default(),
        }
    }
}

impl Slice for PreferencesState {
    fn on_broadcast(&self, broadcast: &Broadcast) -> Self {
        match broadcast {
            Broadcast::Reset { session_id } => PreferencesState::initial(session_id.clone()),
        }
    }
}

impl Slice for IdentificationState {
    fn on_broadcast(&self, broadcast: &Broadcast) -> Self {
        match broadcast {
            Broadcast::Reset { .. } => IdentificationState::default(),
        }
    }
}

impl Slice for DebugState {
    fn on_broadcast(&self, broadcast: &Broadcast) -> Self {
        match broadcast {
            Broadcast::Reset { .. } => DebugState::default(),
        }
    }
}
