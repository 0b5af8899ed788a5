//! Identification slice.
//!
//! Drives the identification modal: whether it is shown and how.

use serde::{Deserialize, Serialize};

/// Identification process status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentificationStatus {
    #[default]
    Unidentified,
    Started,
    Identified,
}

/// Identification slice state.
///
/// `can_reset_pin` and `is_validating_task` are written together when the
/// process starts and only mean something while `status` is `Started`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentificationState {
    pub status: IdentificationStatus,
    pub can_reset_pin: bool,
    pub is_validating_task: bool,
}

/// Options for starting an identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentificationOptions {
    /// Whether the PIN can be reset from the identification modal.
    pub can_reset_pin: bool,
    /// Whether the identification confirms a task (different copy and pictogram).
    pub is_validating_task: bool,
}

/// Transitions accepted by the identification slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentificationAction {
    SetStarted(IdentificationOptions),
    SetIdentified,
    SetUnidentified,
    Reset,
}

/// Pure reducer for the identification slice.
pub fn reduce(state: &IdentificationState, action: &IdentificationAction) -> IdentificationState {
    match action {
        IdentificationAction::SetStarted(options) => IdentificationState {
            status: IdentificationStatus::Started,
            can_reset_pin: options.can_reset_pin,
            is_validating_task: options.is_validating_task,
        },
        IdentificationAction::SetIdentified => IdentificationState {
            status: IdentificationStatus::Identified,
            ..*state
        },
        IdentificationAction::SetUnidentified => IdentificationState {
            status: IdentificationStatus::Unidentified,
            ..*state
        },
        IdentificationAction::Reset => IdentificationState::default(),
    }
}

/// Select the whole identification state.
pub fn select_identification(state: &IdentificationState) -> IdentificationState {
    *state
}

/// Whether the running identification validates a task. `false` unless started.
pub fn select_is_validating_task(state: &IdentificationState) -> bool {
    state.status == IdentificationStatus::Started && state.is_validating_task
}

/// Whether the PIN can be reset from the running identification. `false` unless started.
pub fn select_can_reset_pin(state: &IdentificationState) -> bool {
    state.status == IdentificationStatus::Started && state.can_reset_pin
}
