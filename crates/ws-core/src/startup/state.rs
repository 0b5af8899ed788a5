use serde::{Deserialize, Serialize};

/// Boot sequence status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StartupStatus {
    /// Nothing has happened yet.
    #[default]
    NotStarted,
    /// Boot resources are being initialized.
    Loading,
    /// Boot finished; the user must complete onboarding.
    WaitOnboarding,
    /// Boot finished; the user must identify.
    WaitIdentification,
    /// Reserved for the main flow. No transition produces it yet.
    Done,
    /// Boot failed.
    Error,
}

/// Startup slice state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartupState {
    pub status: StartupStatus,
    pub has_screen_lock: bool,
}

/// Device attributes collected at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartupAttributes {
    pub has_screen_lock: bool,
}
