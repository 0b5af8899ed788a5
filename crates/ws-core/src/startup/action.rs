use super::{StartupAttributes, StartupStatus};

/// Transitions accepted by the startup slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartupAction {
    SetStatus(StartupStatus),
    SetAttributes(StartupAttributes),
    SetError,
    SetLoading,
    /// Slice-local reset.
    Reset,
}
