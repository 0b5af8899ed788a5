//! Root state and transitions.
//!
//! [`AppState`] aggregates the four slices. [`reduce`] routes an [`Action`] to
//! its slice, except for the reset broadcast which every slice observes.

mod action;
mod broadcast;
mod state;

pub use action::{Action, ActionKind, SliceName};
pub use broadcast::{Broadcast, Slice};
pub use state::AppState;

use crate::{debug, identification, preferences, startup};

/// Pure root reducer.
///
/// All slices are computed from `state` before the new root value is
/// returned, so no caller ever sees a partially applied transition.
pub fn reduce(state: &AppState, action: &Action) -> AppState {
    if let Some(broadcast) = action.broadcast() {
        #[cfg(feature = "tracing")]
        tracing::debug!(action = %action.kind(), "reset broadcast to all slices");
        return AppState {
            startup: state.startup.on_broadcast(&broadcast),
            preferences: state.preferences.on_broadcast(&broadcast),
            identification: state.identification.on_broadcast(&broadcast),
            debug: state.debug.on_broadcast(&broadcast),
        };
    }

    match action {
        Action::Startup(action) => AppState {
            startup: startup::reduce(&state.startup, action),
            ..state.clone()
        },
        Action::Preferences(action) => AppState {
            preferences: preferences::reduce(&state.preferences, action),
            ..state.clone()
        },
        Action::Identification(action) => AppState {
            identification: identification::reduce(&state.identification, action),
            ..state.clone()
        },
        Action::Debug(action) => AppState {
            debug: debug::reduce(&state.debug, action),
            ..state.clone()
        },
    }
}
