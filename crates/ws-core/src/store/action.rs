use std::fmt;

use super::Broadcast;
use crate::debug::DebugAction;
use crate::identification::IdentificationAction;
use crate::preferences::PreferencesAction;
use crate::startup::StartupAction;

/// Owner slice of an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SliceName {
    Startup,
    Preferences,
    Identification,
    Debug,
}

impl SliceName {
    pub fn as_str(&self) -> &'static str {
        match self {
            SliceName::Startup => "startup",
            SliceName::Preferences => "preferences",
            SliceName::Identification => "identification",
            SliceName::Debug => "debug",
        }
    }
}

/// A transition request addressed to one slice.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Startup(StartupAction),
    Preferences(PreferencesAction),
    Identification(IdentificationAction),
    Debug(DebugAction),
}

impl Action {
    /// Nominal target slice.
    pub fn slice(&self) -> SliceName {
        self.kind().slice()
    }

    /// Payload-free discriminant, used by listener matchers.
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::Startup(a) => match a {
                StartupAction::SetStatus(_) => ActionKind::StartupSetStatus,
                StartupAction::SetAttributes(_) => ActionKind::StartupSetAttributes,
                StartupAction::SetError => ActionKind::StartupSetError,
                StartupAction::SetLoading => ActionKind::StartupSetLoading,
                StartupAction::Reset => ActionKind::StartupReset,
            },
            Action::Preferences(a) => match a {
                PreferencesAction::SetOnboardingDone => ActionKind::PreferencesSetOnboardingDone,
                PreferencesAction::SetBiometricEnabled(_) => {
                    ActionKind::PreferencesSetBiometricEnabled
                }
                PreferencesAction::Reset { .. } => ActionKind::PreferencesReset,
            },
            Action::Identification(a) => match a {
                IdentificationAction::SetStarted(_) => ActionKind::IdentificationSetStarted,
                IdentificationAction::SetIdentified => ActionKind::IdentificationSetIdentified,
                IdentificationAction::SetUnidentified => {
                    ActionKind::IdentificationSetUnidentified
                }
                IdentificationAction::Reset => ActionKind::IdentificationReset,
            },
            Action::Debug(a) => match a {
                DebugAction::SetModeEnabled(_) => ActionKind::DebugSetModeEnabled,
                DebugAction::SetData(_) => ActionKind::DebugSetData,
                DebugAction::ResetData(_) => ActionKind::DebugResetData,
            },
        }
    }

    /// The broadcast this action triggers, if any. Only the preferences reset
    /// is a global reset.
    pub fn broadcast(&self) -> Option<Broadcast> {
        match self {
            Action::Preferences(PreferencesAction::Reset { session_id }) => {
                Some(Broadcast::Reset {
                    session_id: session_id.clone(),
                })
            }
            _ => None,
        }
    }
}

impl From<StartupAction> for Action {
    fn from(action: StartupAction) -> Self {
        Action::Startup(action)
    }
}

impl From<PreferencesAction> for Action {
    fn from(action: PreferencesAction) -> Self {
        Action::Preferences(action)
    }
}

impl From<IdentificationAction> for Action {
    fn from(action: IdentificationAction) -> Self {
        Action::Identification(action)
    }
}

impl From<DebugAction> for Action {
    fn from(action: DebugAction) -> Self {
        Action::Debug(action)
    }
}

/// Action discriminant without payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    StartupSetStatus,
    StartupSetAttributes,
    StartupSetError,
    StartupSetLoading,
    StartupReset,
    PreferencesSetOnboardingDone,
    PreferencesSetBiometricEnabled,
    PreferencesReset,
    IdentificationSetStarted,
    IdentificationSetIdentified,
    IdentificationSetUnidentified,
    IdentificationReset,
    DebugSetModeEnabled,
    DebugSetData,
    DebugResetData,
}

impl ActionKind {
    pub fn slice(&self) -> SliceName {
        use ActionKind::*;
        match self {
            StartupSetStatus | StartupSetAttributes | StartupSetError | StartupSetLoading
            | StartupReset => SliceName::Startup,
            PreferencesSetOnboardingDone | PreferencesSetBiometricEnabled | PreferencesReset => {
                SliceName::Preferences
            }
            IdentificationSetStarted
            | IdentificationSetIdentified
            | IdentificationSetUnidentified
            | IdentificationReset => SliceName::Identification,
            DebugSetModeEnabled | DebugSetData | DebugResetData => SliceName::Debug,
        }
    }

    /// Transition name within its slice.
    pub fn type_name(&self) -> &'static str {
        use ActionKind::*;
        match self {
            StartupSetStatus => "setStatus",
            StartupSetAttributes => "setAttributes",
            StartupSetError => "setError",
            StartupSetLoading => "setLoading",
            StartupReset | PreferencesReset | IdentificationReset => "reset",
            PreferencesSetOnboardingDone => "setOnboardingDone",
            PreferencesSetBiometricEnabled => "setBiometricEnabled",
            IdentificationSetStarted => "setStarted",
            IdentificationSetIdentified => "setIdentified",
            IdentificationSetUnidentified => "setUnidentified",
            DebugSetModeEnabled => "setModeEnabled",
            DebugSetData => "setData",
            DebugResetData => "resetData",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.slice().as_str(), self.type_name())
    }
}
