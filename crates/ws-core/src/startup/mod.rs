//! Startup slice.
//!
//! Tracks where the app is in its boot sequence and a few device attributes
//! collected while booting.

mod action;
mod state;

pub use action::StartupAction;
pub use state::{StartupAttributes, StartupState, StartupStatus};

/// Pure reducer for the startup slice.
pub fn reduce(state: &StartupState, action: &StartupAction) -> StartupState {
    match action {
        StartupAction::SetStatus(status) => StartupState {
            status: *status,
            ..state.clone()
        },
        StartupAction::SetAttributes(attributes) => StartupState {
            has_screen_lock: attributes.has_screen_lock,
            ..state.clone()
        },
        StartupAction::SetError => StartupState {
            status: StartupStatus::Error,
            ..state.clone()
        },
        StartupAction::SetLoading => StartupState {
            status: StartupStatus::Loading,
            ..state.clone()
        },
        StartupAction::Reset => StartupState::default(),
    }
}

/// Select the startup status.
pub fn select_startup_status(state: &StartupState) -> StartupStatus {
    state.status
}

/// Select whether the device has a screen lock.
pub fn select_has_screen_lock(state: &StartupState) -> bool {
    state.has_screen_lock
}
