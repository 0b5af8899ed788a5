use serde::{Deserialize, Serialize};

use crate::debug::DebugState;
use crate::identification::IdentificationState;
use crate::preferences::PreferencesState;
use crate::startup::StartupState;

/// Root application state. Single source of truth for every slice.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AppState {
    pub startup: StartupState,
    pub preferences: PreferencesState,
    pub identification: IdentificationState,
    pub debug: DebugState,
}
