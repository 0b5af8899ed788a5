//! Root screen derivation.
//!
//! Which root screen the navigation layer renders is a pure function of the
//! startup status. Nothing here is cached; callers derive again on every
//! status change.

use serde::Serialize;

use crate::startup::StartupStatus;

/// Title of the generic failure screen. Fixed so that no failure detail leaks.
pub const GENERIC_ERROR_TITLE: &str = "There's an issue with our systems";
/// Body of the generic failure screen.
pub const GENERIC_ERROR_BODY: &str = "Please try again in a few minutes.";
/// Pictogram of the generic failure screen.
pub const GENERIC_ERROR_PICTOGRAM: &str = "umbrella";
/// Translation key of the loading screen title.
pub const LOADING_TITLE_KEY: &str = "loading.title";

/// Root navigation routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RootRoute {
    Error,
    Loading,
    OnboardingNav,
}

impl RootRoute {
    pub fn name(&self) -> &'static str {
        match self {
            RootRoute::Error => "ROOT_ERROR",
            RootRoute::Loading => "ROOT_LOADING",
            RootRoute::OnboardingNav => "ROOT_ONBOARDING_NAV",
        }
    }
}

/// Content of the generic failure screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorScreenContent {
    pub pictogram: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

impl ErrorScreenContent {
    pub const GENERIC: ErrorScreenContent = ErrorScreenContent {
        pictogram: GENERIC_ERROR_PICTOGRAM,
        title: GENERIC_ERROR_TITLE,
        body: GENERIC_ERROR_BODY,
    };
}

/// Screen the root navigator must show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum RootScreen {
    /// Loading screen; the title is resolved through the locale catalog.
    Loading { title_key: &'static str },
    /// Onboarding flow.
    Onboarding,
    /// Generic, non-diagnostic failure screen.
    GenericError(ErrorScreenContent),
}

impl RootScreen {
    pub fn route(&self) -> RootRoute {
        match self {
            RootScreen::Loading { .. } => RootRoute::Loading,
            RootScreen::Onboarding => RootRoute::OnboardingNav,
            RootScreen::GenericError(_) => RootRoute::Error,
        }
    }
}

/// Derive the root screen from the startup status.
pub fn derive_root_screen(status: StartupStatus) -> RootScreen {
    match status {
        StartupStatus::WaitOnboarding => RootScreen::Onboarding,
        StartupStatus::Error => RootScreen::GenericError(ErrorScreenContent::GENERIC),
        // TODO: route DONE to the main navigator once it exists.
        StartupStatus::Loading
        | StartupStatus::NotStarted
        | StartupStatus::WaitIdentification
        | StartupStatus::Done => RootScreen::Loading {
            title_key: LOADING_TITLE_KEY,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wait_onboarding_shows_onboarding() {
        let screen = derive_root_screen(StartupStatus::WaitOnboarding);
        assert_eq!(screen, RootScreen::Onboarding);
        assert_eq!(screen.route().name(), "ROOT_ONBOARDING_NAV");
    }

    #[test]
    fn error_shows_fixed_generic_content() {
        let screen = derive_root_screen(StartupStatus::Error);
        assert_eq!(screen.route(), RootRoute::Error);
        match screen {
            RootScreen::GenericError(content) => {
                assert_eq!(content.title, "There's an issue with our systems");
                assert_eq!(content.body, "Please try again in a few minutes.");
                assert_eq!(content.pictogram, "umbrella");
            }
            other => panic!("unexpected screen {other:?}"),
        }
    }

    #[test]
    fn everything_else_is_loading() {
        for status in [
            StartupStatus::NotStarted,
            StartupStatus::Loading,
            StartupStatus::WaitIdentification,
            StartupStatus::Done,
        ] {
            assert_eq!(derive_root_screen(status).route(), RootRoute::Loading);
        }
    }
}
